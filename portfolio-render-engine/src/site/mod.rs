pub mod about;
pub mod contact;
pub mod education;
pub mod experience;
pub mod hero;
pub mod nav;
pub mod page;
pub mod projects;
pub mod skills;
pub mod widgets;
