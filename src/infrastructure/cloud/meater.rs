#[cfg(test)]
#[path = "meater_test.rs"]
mod tests;

use async_trait::async_trait;
use serde_derive::Deserialize;
use serde_derive::Serialize;

use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::ApiError;
use crate::domain::models::CloudApi;
use crate::domain::models::CookReading;
use crate::domain::models::Credentials;
use crate::domain::models::DeviceReading;
use crate::domain::models::SessionToken;

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct LoginRequest {
    email: String,
    password: String,
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct LoginData {
    token: String,
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct LoginResponse {
    data: LoginData,
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
struct ProbeTemperatures {
    internal: Option<f64>,
    ambient: Option<f64>,
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
struct CookTemperatures {
    target: Option<f64>,
    peak: Option<f64>,
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct CookTimes {
    elapsed: Option<i64>,
    remaining: Option<i64>,
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
struct CookBody {
    name: Option<String>,
    temperature: Option<CookTemperatures>,
    time: Option<CookTimes>,
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
struct DeviceBody {
    id: String,
    temperature: Option<ProbeTemperatures>,
    cook: Option<CookBody>,
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
struct DevicesData {
    devices: Vec<DeviceBody>,
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
struct DevicesResponse {
    data: DevicesData,
}

impl DeviceBody {
    fn to_reading(&self) -> DeviceReading {
        let temperature = self.temperature.clone().unwrap_or_default();
        let cook = self.cook.as_ref().map(|cook| {
            let cook_temperature = cook.temperature.clone().unwrap_or_default();
            let time = cook.time.clone().unwrap_or_default();

            return CookReading {
                name: cook.name.clone(),
                target: cook_temperature.target,
                peak: cook_temperature.peak,
                elapsed: time.elapsed,
                remaining: time.remaining,
            };
        });

        return DeviceReading {
            id: self.id.to_string(),
            internal: temperature.internal,
            ambient: temperature.ambient,
            cook,
        };
    }
}

pub struct MeaterCloud {
    url: String,
}

impl Default for MeaterCloud {
    fn default() -> MeaterCloud {
        return MeaterCloud {
            url: Config::get(ConfigKey::ApiURL),
        };
    }
}

#[async_trait]
impl CloudApi for MeaterCloud {
    #[allow(clippy::implicit_return)]
    async fn login(&self, credentials: &Credentials) -> Result<SessionToken, ApiError> {
        let req = LoginRequest {
            email: credentials.email.to_string(),
            password: credentials.password.to_string(),
        };

        let res = reqwest::Client::new()
            .post(format!("{url}/login", url = self.url))
            .header("Content-Type", "application/json")
            .json(&req)
            .send()
            .await?;

        let status = res.status().as_u16();
        if status != 200 {
            tracing::error!(status = status, "MEATER Cloud rejected the login request");
            return Err(ApiError::Status { status });
        }

        let text = res.text().await?;
        let login: LoginResponse = serde_json::from_str(&text)?;

        return Ok(SessionToken::new(&login.data.token));
    }

    #[allow(clippy::implicit_return)]
    async fn fetch_devices(&self, token: &str) -> Result<Vec<DeviceReading>, ApiError> {
        let res = reqwest::Client::new()
            .get(format!("{url}/devices", url = self.url))
            // The scheme separator with a colon is what the cloud accepts,
            // RFC 6750 notwithstanding.
            .header("Authorization", format!("Bearer: {token}"))
            .send()
            .await?;

        let status = res.status().as_u16();
        if status == 401 {
            return Err(ApiError::Unauthorized);
        }
        if status != 200 {
            tracing::error!(status = status, "MEATER Cloud devices request failed");
            return Err(ApiError::Status { status });
        }

        let text = res.text().await?;
        let devices: DevicesResponse = serde_json::from_str(&text)?;

        return Ok(devices
            .data
            .devices
            .iter()
            .map(|device| return device.to_reading())
            .collect());
    }
}
