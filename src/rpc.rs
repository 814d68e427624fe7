/// JSON-RPC client for a Sui fullnode
///
/// Blocking HTTP via ureq. Two calls are all the tool needs: building the
/// transaction bytes on the node (`unsafe_moveCall`) and executing the
/// signed transaction (`sui_executeTransactionBlock`). No retries, no
/// timeouts beyond ureq's defaults; a failed call surfaces as a plain
/// error string and the program exits.

use log::debug;
use serde_json::{json, Value};

use crate::types::TransactionBlockResponse;

const USER_AGENT: &str = "movecall/0.1.0 (https://github.com/imazen/movecall)";

pub struct RpcClient {
    endpoint: String,
    agent: ureq::Agent,
}

impl RpcClient {
    pub fn new(endpoint: &str) -> Self {
        Self { endpoint: endpoint.to_string(), agent: ureq::Agent::new() }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Issue one JSON-RPC 2.0 call and unwrap the `result` member
    pub fn call(&self, method: &str, params: Value) -> Result<Value, String> {
        let body = request_body(method, params);
        debug!("rpc {} -> {}", method, self.endpoint);

        let response: Value = self
            .agent
            .post(&self.endpoint)
            .set("User-Agent", USER_AGENT)
            .set("Content-Type", "application/json")
            .send_json(body)
            .map_err(|e| format!("RPC transport error calling {}: {}", method, e))?
            .into_json()
            .map_err(|e| format!("Invalid JSON from {}: {}", method, e))?;

        if let Some(err) = response.get("error") {
            let message =
                err.get("message").and_then(|m| m.as_str()).unwrap_or("unknown RPC error");
            return Err(format!("RPC error from {}: {}", method, message));
        }

        response
            .get("result")
            .cloned()
            .ok_or_else(|| format!("RPC response from {} has no result", method))
    }

    /// Ask the node to build transaction bytes for one Move call.
    /// Returns the base64 `txBytes` ready for signing.
    pub fn build_move_call(
        &self,
        sender: &str,
        package: &str,
        module: &str,
        function: &str,
        arguments: &[Value],
        gas_budget: u64,
    ) -> Result<String, String> {
        let result = self.call(
            "unsafe_moveCall",
            json!([
                sender,
                package,
                module,
                function,
                [],
                arguments,
                Value::Null,
                gas_budget.to_string()
            ]),
        )?;

        result
            .get("txBytes")
            .and_then(|b| b.as_str())
            .map(|b| b.to_string())
            .ok_or_else(|| "unsafe_moveCall result has no txBytes".to_string())
    }

    /// Execute a signed transaction and return the decoded result, with
    /// effects, object changes, and balance changes requested
    pub fn execute_transaction(
        &self,
        tx_bytes: &str,
        signature: &str,
    ) -> Result<TransactionBlockResponse, String> {
        let result = self.call(
            "sui_executeTransactionBlock",
            json!([
                tx_bytes,
                [signature],
                {
                    "showEffects": true,
                    "showEvents": true,
                    "showInput": true,
                    "showRawInput": true,
                    "showObjectChanges": true,
                    "showBalanceChanges": true
                },
                "WaitForLocalExecution"
            ]),
        )?;

        serde_json::from_value(result)
            .map_err(|e| format!("Failed to decode execution result: {}", e))
    }
}

fn request_body(method: &str, params: Value) -> Value {
    json!({
        "jsonrpc": "2.0",
        "id": 1,
        "method": method,
        "params": params
    })
}
