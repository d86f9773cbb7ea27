pub mod component;
pub mod ui;

pub mod actions;
pub mod card_list;
pub mod dialog;
pub mod error_handler;
pub mod feed_provider;
pub mod feed_view;
pub mod loading_indicator;
pub mod main_view;
pub mod nav_bar;
pub mod theme;
pub mod thumbnail;
pub mod top_bar;
