pub mod create;
pub mod find;
pub mod omitted;
pub mod put;
pub mod update;
