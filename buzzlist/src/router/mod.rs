mod gate;
mod resolve;
mod selection;
mod source;
mod watchlist;

pub mod util;
