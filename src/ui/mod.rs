pub mod app;
pub mod events;
pub mod footer;
pub mod header;
pub mod input;
pub mod labels;
pub mod layout;
pub mod mvi;
pub mod render;
pub mod runtime;
pub mod single_field;
pub mod stateful;
pub mod terminal_guard;
pub mod theme;
pub mod two_way;
pub mod widgets;
