#![allow(dead_code)]

pub mod repositories;
