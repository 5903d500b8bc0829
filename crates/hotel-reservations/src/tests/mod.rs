mod common;
mod hotels;
