use crate::domain::ports::PaymentGatewayBox;
use crate::infrastructure::simulated::{GatewayBehavior, SimulatedGateway};
use clap::{Args, ValueEnum};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum GatewayMode {
    Approve,
    Decline,
    Error,
}

/// Gateway settings, read from flags or the environment.
#[derive(Debug, Clone, Args)]
pub struct GatewayConfig {
    /// How the simulated gateway answers every charge
    #[arg(
        long = "gateway",
        value_enum,
        env = "PAYMENT_GATEWAY_MODE",
        default_value_t = GatewayMode::Approve
    )]
    pub mode: GatewayMode,

    /// Error message raised by the gateway in `error` mode
    #[arg(
        long = "gateway-error",
        env = "PAYMENT_GATEWAY_ERROR",
        default_value = "gateway unavailable"
    )]
    pub error_message: String,
}

impl GatewayConfig {
    pub fn behavior(&self) -> GatewayBehavior {
        match self.mode {
            GatewayMode::Approve => GatewayBehavior::Approve,
            GatewayMode::Decline => GatewayBehavior::Decline,
            GatewayMode::Error => GatewayBehavior::Error(self.error_message.clone()),
        }
    }

    pub fn build_gateway(&self) -> PaymentGatewayBox {
        Box::new(SimulatedGateway::new(self.behavior()))
    }
}
