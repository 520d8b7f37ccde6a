pub mod seat;
pub mod vehicle;

pub use seat::{Seat, SeatClass, SeatStatus};
pub use vehicle::{ClassBand, VehicleLayout, VehicleType};
