pub mod generate_form;
pub mod header;
pub mod image_section;
pub mod tab_bar;
