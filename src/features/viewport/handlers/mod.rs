pub mod viewport_handler;
