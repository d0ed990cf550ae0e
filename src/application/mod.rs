pub mod add_movie;
pub mod recommend;
