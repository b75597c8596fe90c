mod movie;
mod trending;

pub use movie::{Movie, MoviePage, POSTER_IMAGE_BASE};
pub use trending::TrendingEntry;
