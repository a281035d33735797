pub mod image;
pub mod layout;
pub mod mvi;
pub mod sortable;
pub mod theme;
pub mod view;
