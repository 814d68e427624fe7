/// Move-call request construction
///
/// The tool submits exactly one contract call per run. The default target
/// is the sword-purchase demo entry point; `--target` and `--args`
/// override it. Argument strings are passed through to the node, which
/// resolves object ids and pure values itself. The node-side builder
/// cannot chain a transfer of the call's output onto the same
/// transaction, so any object the call produces must be transferred by
/// the entry function itself.

use serde_json::Value;

/// Demo entry point: buys a sword object with a USDC coin
pub const DEFAULT_TARGET: &str =
    "0xcbbf37a851ed7b625731ca497e2d4aea18cf18145fac3b78bd64f274f6a09d30::usdc_usage::buy_sword_with_usdc";

pub const DEFAULT_GAS_BUDGET: u64 = 10_000_000;

/// One fully resolved Move call, ready to hand to the RPC layer
#[derive(Debug, Clone, PartialEq)]
pub struct MoveCallRequest {
    pub package: String,
    pub module: String,
    pub function: String,
    pub arguments: Vec<Value>,
    pub gas_budget: u64,
}

impl MoveCallRequest {
    /// Parse a `package::module::function` target plus raw argument
    /// strings into a request
    pub fn from_target(
        target: &str,
        args: &[String],
        gas_budget: u64,
    ) -> Result<Self, String> {
        let parts: Vec<&str> = target.split("::").collect();
        let (package, module, function) = match parts.as_slice() {
            [package, module, function] => (*package, *module, *function),
            _ => {
                return Err(format!(
                    "Invalid target '{}': expected package::module::function",
                    target
                ));
            }
        };
        if package.is_empty() || module.is_empty() || function.is_empty() {
            return Err(format!("Invalid target '{}': empty segment", target));
        }

        Ok(Self {
            package: package.to_string(),
            module: module.to_string(),
            function: function.to_string(),
            arguments: args.iter().map(|a| Value::String(a.clone())).collect(),
            gas_budget,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_default_target() {
        let req = MoveCallRequest::from_target(DEFAULT_TARGET, &[], DEFAULT_GAS_BUDGET).unwrap();
        assert_eq!(req.module, "usdc_usage");
        assert_eq!(req.function, "buy_sword_with_usdc");
        assert!(req.package.starts_with("0xcbbf"));
        assert!(req.arguments.is_empty());
    }

    #[test]
    fn carries_arguments_through_as_strings() {
        let args = vec!["0xc01".to_string(), "1".to_string()];
        let req = MoveCallRequest::from_target("0x2::coin::split", &args, 5).unwrap();
        assert_eq!(req.arguments, vec![Value::String("0xc01".into()), Value::String("1".into())]);
        assert_eq!(req.gas_budget, 5);
    }

    #[test]
    fn rejects_malformed_targets() {
        assert!(MoveCallRequest::from_target("justafunction", &[], 1).is_err());
        assert!(MoveCallRequest::from_target("0x2::coin", &[], 1).is_err());
        assert!(MoveCallRequest::from_target("0x2::coin::split::extra", &[], 1).is_err());
        assert!(MoveCallRequest::from_target("0x2::::split", &[], 1).is_err());
    }
}
