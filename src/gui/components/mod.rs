// src/gui/components/mod.rs
pub mod data_table;
pub mod export_bar;
pub mod intelligence;
pub mod map_view;
pub mod sidebar;
pub mod tabs;
