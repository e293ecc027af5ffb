pub mod classification_handler;
