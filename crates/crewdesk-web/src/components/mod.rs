pub mod chat;
pub mod header;
pub mod model_select;
pub mod research;
