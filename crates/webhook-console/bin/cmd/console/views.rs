pub(crate) mod bottom_bar;
pub(crate) mod cache;
pub(crate) mod dashboard;
pub(crate) mod details;
pub(crate) mod logs;
pub(crate) mod merge_map;
pub(crate) mod message;
pub(crate) mod tabs;
