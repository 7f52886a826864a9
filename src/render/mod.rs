pub mod fixture;

pub use fixture::render_fixture;
