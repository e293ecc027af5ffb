mod classification_dto;

pub use classification_dto::{
    ClassificationPhase, ClassificationStatusDto, StartClassificationDto,
};
