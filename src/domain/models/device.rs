/// A single probe as reported by the cloud, flattened out of the wire envelope
/// and left unformatted. Temperatures are celsius, durations are seconds.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DeviceReading {
    pub id: String,
    pub internal: Option<f64>,
    pub ambient: Option<f64>,
    pub cook: Option<CookReading>,
}

/// Cook details attached to a probe while a cook is active. Every field is
/// optional on the wire, including `remaining`, which is `-1` while the cloud
/// is still estimating.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CookReading {
    pub name: Option<String>,
    pub target: Option<f64>,
    pub peak: Option<f64>,
    pub elapsed: Option<i64>,
    pub remaining: Option<i64>,
}
