//! SeaORM entity definitions for the restaurant platform schema.
pub mod errors;
pub mod db;
pub mod enums;

pub mod user;
pub mod image;
pub mod restaurant;
pub mod section;
pub mod dining_table;
pub mod menu;
pub mod dish;
pub mod reservation;
pub mod payment;
pub mod review;
pub mod subscription_plan;
pub mod subscription;
pub mod layout_object;
pub mod section_layout_object;

#[cfg(test)]
mod tests;
