//! Current block source backed by the node.

use alloy::{
    providers::{DynProvider, Provider, ProviderBuilder},
    rpc::client::RpcClient,
};
use pool_view::{Network, pool::ChainState};
use tracing::debug;
use url::Url;

use crate::error::Result;

/// Reads the chain head through the node RPC.
#[derive(Debug)]
pub struct RpcClock {
    provider: DynProvider,
    network: Network,
}

impl RpcClock {
    pub fn new(node_url: Url, network: Network) -> Self {
        let client = RpcClient::new_http(node_url);
        client.set_poll_interval(network.polling_interval());
        let provider = DynProvider::new(ProviderBuilder::new().connect_client(client));
        Self { provider, network }
    }

    /// Chain state at the latest block, with the network's block time.
    pub async fn chain_state(&self) -> Result<ChainState> {
        let block = self.provider.get_block_number().await?;
        debug!(block, "Fetched current block");
        Ok(ChainState::at_block(&self.network, block))
    }
}
