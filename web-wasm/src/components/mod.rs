pub mod gallery_grid;
pub mod header;
pub mod image_card;
pub mod lightbox_modal;
pub mod search_bar;
