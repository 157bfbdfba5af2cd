pub mod lenient;
pub mod piwik;

pub trait FileParser {
    type Output;
    type Error;

    fn parse(&self, bytes: &[u8]) -> Result<Self::Output, Self::Error>;
}
