use clobbermind::prelude::*;

pub fn setup() -> Result<()>
{
    env_logger::try_init().map_err(|_| Error::new(Kind::LoggerError, "could not initialize the test logger".into()))
}
