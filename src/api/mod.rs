pub mod form;
pub mod response;
pub mod todos;
