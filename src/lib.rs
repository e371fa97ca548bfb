pub(crate) mod agent;
pub(crate) mod clobber;
pub(crate) mod driver;
pub(crate) mod error;

#[allow(unused)]
pub mod prelude
{
    pub use std::str::FromStr;

    pub use log::{self};

    pub use crate::{
        agent::*,
        clobber::*,
        driver::{Arena, Console, DriverOptions, SideConfig},
        error::{Error, Kind, Result},
    };
}
