// Core capability traits, guard helpers, and error modeling.
pub mod class;
pub mod element;
pub mod error;
pub mod event;
pub mod visibility;
