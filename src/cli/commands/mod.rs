pub mod combine;
pub mod daily;
