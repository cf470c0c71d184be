pub mod city;
pub mod prayer;

pub use city::{City, CITIES};
pub use prayer::{NextPrayerInfo, PrayerEntry, PrayerName};
