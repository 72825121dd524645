use core::fmt;

use chrono::{DateTime, Datelike, Local, NaiveDate, NaiveDateTime, TimeZone, Timelike};

/// A file to be stored in the archive: its name and its raw content.
///
/// The name is written as is. It is expected to be a simple ASCII file name such as
/// `INV-0001.pdf`; no path sanitization is done and the UTF-8 flag is never set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    pub name: String,
    pub data: Vec<u8>,
}

impl FileEntry {
    pub fn new<S: Into<String>, D: Into<Vec<u8>>>(name: S, data: D) -> Self {
        Self {
            name: name.into(),
            data: data.into(),
        }
    }
}

impl<S: Into<String>, D: Into<Vec<u8>>> From<(S, D)> for FileEntry {
    fn from((name, data): (S, D)) -> Self {
        FileEntry::new(name, data)
    }
}

/// A packed MS-DOS timestamp, as written in the local and central headers.
///
/// `time` holds `second / 2` in bits 0-4, the minute in bits 5-10 and the hour in bits 11-15.
/// `date` holds the day in bits 0-4, the month in bits 5-8 and `year - 1980` in bits 9-15.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub struct DosTimestamp {
    pub time: u16,
    pub date: u16,
}

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct DateTimeCS {
    year: u16,
    month: u16,
    day: u16,
    hour: u16,
    minute: u16,
    second: u16,
}

impl Default for DateTimeCS {
    /// 1980, January 1st, 12AM, the MS-DOS epoch.
    fn default() -> Self {
        Self {
            year: 1980,
            month: 1,
            day: 1,
            hour: 0,
            minute: 0,
            second: 0,
        }
    }
}

impl DateTimeCS {
    /// Values are taken as given. Out of range fields are masked to their bit width when packed.
    pub fn new(year: u16, month: u16, day: u16, hour: u16, minute: u16, second: u16) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }

    pub fn from_chrono_datetime<Tz: TimeZone>(datetime: &DateTime<Tz>) -> Self {
        Self {
            year: datetime.year().clamp(0, u16::MAX as i32) as u16,
            month: datetime.month() as u16,
            day: datetime.day() as u16,
            hour: datetime.hour() as u16,
            minute: datetime.minute() as u16,
            second: datetime.second() as u16,
        }
    }

    pub fn now() -> Self {
        Self::from_chrono_datetime(&Local::now())
    }

    pub fn from_msdos(datepart: u16, timepart: u16) -> Self {
        let seconds = (timepart & 0b0000000000011111) << 1;
        let minutes = (timepart & 0b0000011111100000) >> 5;
        let hours = (timepart & 0b1111100000000000) >> 11;
        let days = datepart & 0b0000000000011111;
        let months = (datepart & 0b0000000111100000) >> 5;
        let years = (datepart & 0b1111111000000000) >> 9;

        Self {
            year: years + 1980,
            month: months,
            day: days,
            hour: hours,
            minute: minutes,
            second: seconds,
        }
    }

    pub fn to_time(&self) -> Option<NaiveDateTime> {
        NaiveDate::from_ymd_opt(self.year as i32, self.month as u32, self.day as u32)?.and_hms_opt(
            self.hour as u32,
            self.minute as u32,
            self.second as u32,
        )
    }

    /// Pack into the MS-DOS format.
    ///
    /// Years before 1980 are stored as 1980 and years after 2107 as 2107, the 7 bit year field
    /// never wraps. Seconds lose their lowest bit. Every other field is masked to its width so an
    /// out of range value cannot spill into its neighbour.
    pub fn ms_dos(&self) -> DosTimestamp {
        let year = self.year.saturating_sub(1980).min(0x7F);
        let date = (self.day & 0x1F) | ((self.month & 0xF) << 5) | (year << 9);
        let time =
            ((self.second / 2) & 0x1F) | ((self.minute & 0x3F) << 5) | ((self.hour & 0x1F) << 11);
        DosTimestamp { time, date }
    }
}

impl fmt::Display for DateTimeCS {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_time() {
            Some(date_time) => write!(f, "{:}", date_time),
            None => write!(
                f,
                "{:04}-{:02}-{:02} {:02}:{:02}:{:02} (invalid)",
                self.year, self.month, self.day, self.hour, self.minute, self.second
            ),
        }
    }
}

/// Encode a chrono date and time as an MS-DOS timestamp.
pub fn to_dos_date_time<Tz: TimeZone>(datetime: &DateTime<Tz>) -> DosTimestamp {
    DateTimeCS::from_chrono_datetime(datetime).ms_dos()
}

/// The (timezone-less) date and time written in the archive alongside every file.
///
/// Use `FileDateTime::Now` to stamp the entries with the local wall clock at encode time.
/// Use `FileDateTime::Zero` if the date and time are insignificant. This will set the value to 1980, January 1th, 12AM.
/// Use `FileDateTime::Custom` if you need a reproducible archive.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Default)]
pub enum FileDateTime {
    #[default]
    Now,
    /// 1980, January 1th, 12AM.
    Zero,
    Custom(DateTimeCS),
}

impl FileDateTime {
    pub fn resolve(&self) -> DateTimeCS {
        match self {
            FileDateTime::Now => DateTimeCS::now(),
            FileDateTime::Zero => DateTimeCS::default(),
            FileDateTime::Custom(date_time) => *date_time,
        }
    }

    pub fn ms_dos(&self) -> DosTimestamp {
        self.resolve().ms_dos()
    }
}
