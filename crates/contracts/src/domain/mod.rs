pub mod a001_writer;
pub mod a002_language;
pub mod a003_group;
pub mod a004_section;
pub mod a005_category;
pub mod a006_topic;
pub mod a007_book;
pub mod a008_article;
pub mod a009_kalam;
pub mod a010_event;
pub mod a011_kalam_submission;
pub mod a012_bazm_durood;
pub mod a013_mazmoon_submission;
pub mod common;
pub mod registry;
