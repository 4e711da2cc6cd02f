pub mod io;
pub mod rgb8;
pub mod u8;

pub use self::rgb8::ImageRgb8;
pub use self::u8::ImageU8;
