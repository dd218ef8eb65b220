pub mod note_form;
pub mod note_list;
pub mod toast_stack;
