// Web rendering layer (Askama templates)

pub mod pages;
