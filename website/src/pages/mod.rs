pub mod faq;
pub mod getting_started;
pub mod home;
pub mod how_it_works;
