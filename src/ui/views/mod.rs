pub mod exercises;
pub mod home;
pub mod quiz;
pub mod section;
pub mod topic_menu;
