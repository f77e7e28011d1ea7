use crate::ui;
use color_eyre::eyre::{
    Report,
    Result,
    WrapErr,
    eyre,
};
use fuels::{
    accounts::ViewOnlyAccount,
    prelude::{
        AssetId,
        CallParameters,
        ContractId,
        Execution,
        Provider,
        VariableOutputPolicy,
        WalletUnlocked,
    },
    types::Identity,
};
use open_raffles::{
    deployment,
    format,
    metadata::{
        MetadataKey,
        TokenMetadataClient,
    },
    nft_types,
    raffle_types::{
        self,
        AuthorizedContract,
    },
    views::{
        self,
        BuyControl,
        ClaimPrizeView,
        ClaimRevenueView,
        RaffleCard,
        TicketRow,
    },
    wallets,
};
use std::{
    collections::HashMap,
    path::PathBuf,
    str::FromStr,
    time::Duration,
};
use tokio::time;
use tracing::error;

pub const DEFAULT_TESTNET_RPC_URL: &str = "https://testnet.fuel.network";
pub const DEFAULT_DEVNET_RPC_URL: &str = "https://devnet.fuel.network";
pub const DEFAULT_LOCAL_RPC_URL: &str = "http://localhost:4000/";

const FORWARD_GAS_LIMIT: u64 = 1_000_000;
const REFRESH_INTERVAL: Duration = Duration::from_secs(5);
/// Collections sell fresh tokens at a flat price of one coin.
const MINT_PRICE_BASE_UNITS: u64 = format::BASE_UNITS_PER_COIN;

#[derive(Clone, Debug)]
pub enum NetworkTarget {
    Testnet { url: String },
    Devnet { url: String },
    LocalNode { url: String },
}

impl NetworkTarget {
    pub fn url(&self) -> &str {
        match self {
            NetworkTarget::Testnet { url } => url,
            NetworkTarget::Devnet { url } => url,
            NetworkTarget::LocalNode { url } => url,
        }
    }

    pub fn deployment_env(&self) -> deployment::DeploymentEnv {
        match self {
            NetworkTarget::Testnet { .. } => deployment::DeploymentEnv::Test,
            NetworkTarget::Devnet { .. } => deployment::DeploymentEnv::Dev,
            NetworkTarget::LocalNode { .. } => deployment::DeploymentEnv::Local,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            NetworkTarget::Testnet { .. } => "testnet",
            NetworkTarget::Devnet { .. } => "devnet",
            NetworkTarget::LocalNode { .. } => "local",
        }
    }
}

#[derive(Clone, Debug)]
pub enum WalletConfig {
    ForcKeystore { owner: String, dir: PathBuf },
}

impl WalletConfig {
    fn dir(&self) -> &PathBuf {
        match self {
            WalletConfig::ForcKeystore { dir, .. } => dir,
        }
    }
}

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub network: NetworkTarget,
    pub wallets: WalletConfig,
}

/// Everything bound to the currently unlocked wallet. Switching wallets
/// rebuilds the whole session so no handle keeps signing with the old key.
pub struct Session {
    pub provider: Provider,
    pub wallet: WalletUnlocked,
    pub wallet_name: String,
    pub registry: raffle_types::RaffleRegistry<WalletUnlocked>,
    pub registry_id: ContractId,
    pub base_asset_id: AssetId,
    nft_handles: HashMap<ContractId, nft_types::NftCollection<WalletUnlocked>>,
}

impl Session {
    pub async fn establish(config: &AppConfig) -> Result<Self> {
        let url = config.network.url();
        let provider = Provider::connect(url)
            .await
            .wrap_err_with(|| format!("Failed to connect to provider at {url}"))?;

        let (owner_name, wallet_dir) = match &config.wallets {
            WalletConfig::ForcKeystore { owner, dir } => (owner, dir),
        };
        let descriptor = wallets::find_wallet(wallet_dir, owner_name)
            .wrap_err("Unable to locate the selected wallet")?;
        let wallet = wallets::unlock_wallet(&descriptor, &provider)?;

        Self::with_wallet(config, provider, wallet, descriptor.name).await
    }

    pub async fn with_wallet(
        config: &AppConfig,
        provider: Provider,
        wallet: WalletUnlocked,
        wallet_name: String,
    ) -> Result<Self> {
        let env = config.network.deployment_env();
        let store = deployment::DeploymentStore::new(env)?;
        let record = store.latest()?;
        let selected = match record {
            Some(record) => record,
            None => {
                let summary = format_deployment_summary(
                    env,
                    config.network.url(),
                    &store,
                    None,
                );
                return Err(eyre!(summary));
            }
        };

        let registry_id = ContractId::from_str(&selected.registry_contract_id)
            .map_err(|e| {
                eyre!(
                    "Deployment record contains an invalid contract id: {e:?}, {:?}",
                    selected.registry_contract_id
                )
            })?;

        let consensus_parameters = provider.consensus_parameters().await?;
        let base_asset_id = *consensus_parameters.base_asset_id();

        let registry = open_raffles::registry_instance(&registry_id, wallet.clone());

        Ok(Self {
            provider,
            wallet,
            wallet_name,
            registry,
            registry_id,
            base_asset_id,
            nft_handles: HashMap::new(),
        })
    }

    /// Cached collection handle for a token contract. Returns a clone so
    /// callers never hold a borrow of the session across an await.
    pub fn nft(&mut self, id: ContractId) -> nft_types::NftCollection<WalletUnlocked> {
        self.nft_handles
            .entry(id)
            .or_insert_with(|| open_raffles::nft_instance(&id, self.wallet.clone()))
            .clone()
    }

    pub fn account_identity(&self) -> Identity {
        Identity::Address(self.wallet.address().into())
    }
}

#[derive(Clone, Debug)]
pub struct RaffleDetail {
    pub card: RaffleCard,
    pub start_date: String,
    pub owner_short: String,
    pub winner_short: Option<String>,
    pub buy: BuyControl,
    pub unit_price_base: u64,
    pub claim_prize: ClaimPrizeView,
    pub claim_revenue: ClaimRevenueView,
    pub tickets: Vec<TicketRow>,
}

#[derive(Clone, Debug)]
pub struct AppSnapshot {
    pub network_label: &'static str,
    pub wallet_name: String,
    pub account_short: String,
    pub balance_base: u64,
    pub is_admin: bool,
    pub authorized: Vec<AuthorizedContract>,
    pub supplies: Vec<(ContractId, u64)>,
    pub cards: Vec<RaffleCard>,
    pub my_cards: Vec<RaffleCard>,
    pub wallet_names: Vec<String>,
    pub detail: Option<RaffleDetail>,
    pub status: String,
    pub errors: Vec<String>,
}

pub struct AppController {
    pub session: Session,
    pub config: AppConfig,
    metadata: TokenMetadataClient,
    image_cache: HashMap<MetadataKey, Option<String>>,
    pub selected: Option<MetadataKey>,
    pub status: String,
    errors: Vec<String>,
}

impl AppController {
    pub async fn establish(config: AppConfig) -> Result<Self> {
        let session = Session::establish(&config).await?;
        let metadata = TokenMetadataClient::new()?;
        Ok(Self {
            session,
            config,
            metadata,
            image_cache: HashMap::new(),
            selected: None,
            status: String::from("Ready"),
            errors: Vec::new(),
        })
    }

    pub async fn snapshot(&mut self) -> Result<AppSnapshot> {
        let registry = self.session.registry.clone();
        let account = self.session.account_identity();

        let registry_owner = registry
            .methods()
            .owner()
            .simulate(Execution::StateReadOnly)
            .await?
            .value;
        let is_admin = registry_owner == account;

        let authorized = registry
            .methods()
            .get_authorized_contracts()
            .simulate(Execution::StateReadOnly)
            .await?
            .value;
        let symbols: HashMap<ContractId, String> = authorized
            .iter()
            .map(|auth| (auth.instance, auth.symbol.clone()))
            .collect();

        let mut all_raffles = Vec::new();
        for auth in &authorized {
            let list = registry
                .methods()
                .get_raffles_by_contract(auth.instance)
                .simulate(Execution::StateReadOnly)
                .await?
                .value;
            all_raffles.extend(list);
        }

        let mut my_raffles = Vec::new();
        for auth in &authorized {
            let list = registry
                .methods()
                .get_raffles_by_owner(auth.instance, account.clone())
                .simulate(Execution::StateReadOnly)
                .await?
                .value;
            my_raffles.extend(list);
        }

        self.refresh_images(&all_raffles).await;

        let mut cards = Vec::with_capacity(all_raffles.len());
        for raffle in &all_raffles {
            cards.push(self.card_for(raffle, &symbols));
        }
        views::sort_cards(&mut cards);

        let mut my_cards = Vec::with_capacity(my_raffles.len());
        for raffle in &my_raffles {
            my_cards.push(self.card_for(raffle, &symbols));
        }
        views::sort_cards(&mut my_cards);

        let mut supplies = Vec::new();
        if is_admin {
            for auth in &authorized {
                let nft = self.session.nft(auth.instance);
                let supply = nft
                    .methods()
                    .total_supply()
                    .simulate(Execution::StateReadOnly)
                    .await?
                    .value;
                supplies.push((auth.instance, supply));
            }
        }

        let detail = match self.selected {
            Some(key) => Some(self.fetch_detail(&registry, key, &symbols).await?),
            None => None,
        };

        let balance_base = self
            .session
            .wallet
            .get_asset_balance(&self.session.base_asset_id)
            .await?;

        let wallet_names = wallets::list_wallets(self.config.wallets.dir())?
            .into_iter()
            .map(|w| w.name)
            .collect();

        Ok(AppSnapshot {
            network_label: self.config.network.label(),
            wallet_name: self.session.wallet_name.clone(),
            account_short: format::short_address(&views::identity_hex(&account)),
            balance_base,
            is_admin,
            authorized,
            supplies,
            cards,
            my_cards,
            wallet_names,
            detail,
            status: self.status.clone(),
            errors: self.errors.iter().rev().take(5).cloned().collect(),
        })
    }

    fn card_for(
        &self,
        raffle: &raffle_types::Raffle,
        symbols: &HashMap<ContractId, String>,
    ) -> RaffleCard {
        let key = (raffle.token_contract, raffle.token_id);
        let symbol = symbols
            .get(&raffle.token_contract)
            .cloned()
            .unwrap_or_else(|| String::from("?"));
        let image = self.image_cache.get(&key).cloned().flatten();
        views::raffle_card(raffle, &symbol, image)
    }

    /// Resolves token URIs and fetches metadata documents for raffles we
    /// have not seen yet. Failures land in the error panel, not in the
    /// snapshot path, so one dead gateway cannot take the app down.
    async fn refresh_images(&mut self, raffles: &[raffle_types::Raffle]) {
        let mut pending: Vec<(MetadataKey, String)> = Vec::new();
        let mut errs: Vec<String> = Vec::new();

        let mut missing: Vec<MetadataKey> = Vec::new();
        for raffle in raffles {
            let key = (raffle.token_contract, raffle.token_id);
            if !self.image_cache.contains_key(&key) && !missing.contains(&key) {
                missing.push(key);
            }
        }

        for key in missing {
            let nft = self.session.nft(key.0);
            match nft
                .methods()
                .token_uri(key.1)
                .simulate(Execution::StateReadOnly)
                .await
            {
                Ok(response) => pending.push((key, response.value)),
                Err(e) => {
                    errs.push(format!("token_uri({}, {}) error: {}", key.0, key.1, e));
                    self.image_cache.insert(key, None);
                }
            }
        }

        for (key, result) in self.metadata.fetch_all(pending).await {
            match result {
                Ok(meta) => {
                    self.image_cache.insert(key, meta.image_url);
                }
                Err(e) => {
                    errs.push(format!("metadata({}, {}) error: {}", key.0, key.1, e));
                    self.image_cache.insert(key, None);
                }
            }
        }

        self.push_errors(errs);
    }

    async fn fetch_detail(
        &self,
        registry: &raffle_types::RaffleRegistry<WalletUnlocked>,
        key: MetadataKey,
        symbols: &HashMap<ContractId, String>,
    ) -> Result<RaffleDetail> {
        let raffle = registry
            .methods()
            .get_raffle_by_token(key.0, key.1)
            .simulate(Execution::StateReadOnly)
            .await?
            .value;
        let tickets = registry
            .methods()
            .get_tickets_by_token(key.0, key.1)
            .simulate(Execution::StateReadOnly)
            .await?
            .value;

        let viewer = self.session.account_identity();
        let card = self.card_for(&raffle, symbols);
        let winner_short = raffle.is_finished.then(|| {
            format::short_address(&views::identity_hex(&raffle.winner))
        });

        Ok(RaffleDetail {
            start_date: format::start_date_string(raffle.creation_date),
            owner_short: format::short_address(&views::identity_hex(&raffle.owner)),
            winner_short,
            buy: views::buy_control(&raffle),
            unit_price_base: raffle.price,
            claim_prize: views::claim_prize_view(&raffle, &viewer),
            claim_revenue: views::claim_revenue_view(&raffle, &viewer),
            tickets: views::ticket_rows(&raffle, &tickets),
            card,
        })
    }

    pub fn open_detail(&mut self, token_contract: ContractId, token_id: u64) {
        self.selected = Some((token_contract, token_id));
    }

    pub fn close_detail(&mut self) {
        self.selected = None;
    }

    /// Reads the collection symbol before touching registry state, so a
    /// typoed contract id is rejected without an on-chain write.
    pub async fn authorize_contract(&mut self, raw_id: &str) -> Result<()> {
        let id = ContractId::from_str(raw_id.trim())
            .map_err(|e| eyre!("Invalid contract id {raw_id:?}: {e:?}"))?;
        let nft = self.session.nft(id);
        let symbol = nft
            .methods()
            .symbol()
            .simulate(Execution::StateReadOnly)
            .await
            .wrap_err_with(|| format!("Contract {id} did not answer symbol()"))?
            .value;

        self.session
            .registry
            .methods()
            .add_authorized_contract(id, symbol.clone())
            .call()
            .await?;
        self.status = format!("Authorized {} ({})", short_contract(&id), symbol);
        Ok(())
    }

    /// Approves the registry for the token first; creation pulls the token
    /// into escrow in the same flow.
    pub async fn create_raffle(
        &mut self,
        token_contract: ContractId,
        token_id: u64,
        price_base: u64,
        max_tickets: u64,
        duration_days: u64,
    ) -> Result<()> {
        let nft = self.session.nft(token_contract);
        nft.methods()
            .approve(Identity::ContractId(self.session.registry_id), token_id)
            .call()
            .await
            .wrap_err("Approving the registry for the token failed")?;

        self.session
            .registry
            .methods()
            .create_raffle(token_contract, token_id, price_base, max_tickets, duration_days)
            .with_contracts(&[&nft])
            .call()
            .await?;
        self.status = format!(
            "Created raffle for token #{} at {} coins",
            token_id,
            format::format_coins(price_base)
        );
        Ok(())
    }

    pub async fn mint(&mut self, token_contract: ContractId) -> Result<()> {
        let nft = self.session.nft(token_contract);
        let call = CallParameters::new(
            MINT_PRICE_BASE_UNITS,
            self.session.base_asset_id,
            FORWARD_GAS_LIMIT,
        );
        nft.methods().mint(1).call_params(call)?.call().await?;
        self.status = format!("Minted 1 token from {}", short_contract(&token_contract));
        Ok(())
    }

    pub async fn buy_tickets(&mut self, quantity: u64) -> Result<()> {
        let key = self.selected_key()?;
        if quantity == 0 {
            return Err(eyre!("Quantity must be at least 1"));
        }
        let raffle = self
            .session
            .registry
            .methods()
            .get_raffle_by_token(key.0, key.1)
            .simulate(Execution::StateReadOnly)
            .await?
            .value;
        let amount = raffle.price.saturating_mul(quantity);
        let call = CallParameters::new(amount, self.session.base_asset_id, FORWARD_GAS_LIMIT);
        self.session
            .registry
            .methods()
            .buy_raffle_ticket(key.0, key.1, quantity)
            .call_params(call)?
            .call()
            .await?;
        self.status = format!(
            "Bought {} ticket(s) for {} coins",
            quantity,
            format::format_coins(amount)
        );
        Ok(())
    }

    pub async fn execute_raffle(&mut self) -> Result<()> {
        let key = self.selected_key()?;
        self.session
            .registry
            .methods()
            .execute_raffle(key.0, key.1)
            .call()
            .await?;
        self.status = format!("Executed raffle for token #{}", key.1);
        Ok(())
    }

    /// The prize handover is a cross-contract transfer, so the collection
    /// contract rides along as a call input.
    pub async fn claim_prize(&mut self) -> Result<()> {
        let key = self.selected_key()?;
        let nft = self.session.nft(key.0);
        self.session
            .registry
            .methods()
            .claim_raffle_prize(key.0, key.1)
            .with_contracts(&[&nft])
            .call()
            .await?;
        self.status = format!("Claimed prize token #{}", key.1);
        Ok(())
    }

    pub async fn claim_revenue(&mut self) -> Result<()> {
        let key = self.selected_key()?;
        self.session
            .registry
            .methods()
            .claim_raffle_revenue(key.0, key.1)
            .with_variable_output_policy(VariableOutputPolicy::EstimateMinimum)
            .call()
            .await?;
        self.status = format!("Claimed revenue for token #{}", key.1);
        Ok(())
    }

    /// Prompts for the new wallet's password on the plain terminal; the
    /// caller suspends the TUI around this.
    pub async fn switch_wallet(&mut self, name: &str) -> Result<()> {
        let dir = self.config.wallets.dir().clone();
        let descriptor = wallets::find_wallet(&dir, name)?;
        let wallet = wallets::unlock_wallet(&descriptor, &self.session.provider)?;
        self.session = Session::with_wallet(
            &self.config,
            self.session.provider.clone(),
            wallet,
            descriptor.name,
        )
        .await?;
        self.status = format!("Switched to wallet '{name}'");
        Ok(())
    }

    fn selected_key(&self) -> Result<MetadataKey> {
        self.selected.ok_or_else(|| eyre!("No raffle selected"))
    }

    pub fn note_failure(&mut self, action: &str, err: Report) {
        self.status = format!("{action} failed");
        self.push_errors(vec![format!("{action}: {err}")]);
    }

    fn push_errors(&mut self, mut items: Vec<String>) {
        if items.is_empty() {
            return;
        }
        for item in &items {
            error!("{}", item);
        }
        self.errors.append(&mut items);
        if self.errors.len() > 50 {
            let drain = self.errors.len() - 50;
            self.errors.drain(0..drain);
        }
    }
}

fn short_contract(id: &ContractId) -> String {
    format::short_address(&format!("0x{}", hex::encode(*id)))
}

fn format_deployment_summary(
    env: deployment::DeploymentEnv,
    url: &str,
    store: &deployment::DeploymentStore,
    record: Option<&deployment::DeploymentRecord>,
) -> String {
    let mut message = format!(
        "No usable registry deployment for {env} at {url}.\n\nLatest recorded deployment for {env}:",
    );

    if let Some(record) = record {
        let note = record.note.as_deref().unwrap_or("(no note)");
        message.push_str(&format!(
            "\n  {} - {} @ {} ({})",
            record.deployed_at, record.registry_contract_id, record.network_url, note,
        ));
    } else {
        message.push_str("\n  (none recorded)");
    }

    message.push_str(&format!(
        "\nDeployment records file: {}",
        store.path().display()
    ));
    message.push_str("\n\nRecord the registry deployment there and run again.");

    message
}

pub async fn run_app(config: AppConfig) -> Result<()> {
    let mut controller = AppController::establish(config).await?;
    let mut ui_state = ui::UiState::default();

    // UI bootstrap
    ui::terminal_enter(&mut ui_state)?;
    let res = run_loop(&mut controller, &mut ui_state).await;
    ui::terminal_exit()?;
    res
}

async fn run_loop(
    controller: &mut AppController,
    ui_state: &mut ui::UiState,
) -> Result<()> {
    let mut ticker = time::interval(REFRESH_INTERVAL);
    let mut last_snapshot = controller.snapshot().await?;
    ui::draw(ui_state, &last_snapshot)?;
    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => { break; }
            _ = ticker.tick() => {
                last_snapshot = controller.snapshot().await?;
                ui::draw(ui_state, &last_snapshot)?;
            }
            ev = ui::next_event(ui_state) => {
                match ev? {
                    ui::UserEvent::Quit => break,
                    ui::UserEvent::Redraw => {
                        // UI-only update; redraw without hitting the chain
                        ui::draw(ui_state, &last_snapshot)?;
                        continue;
                    }
                    ui::UserEvent::OpenDetail { token_contract, token_id } => {
                        controller.open_detail(token_contract, token_id);
                    }
                    ui::UserEvent::CloseDetail => controller.close_detail(),
                    ui::UserEvent::ConfirmBuy { quantity } => {
                        if let Err(e) = controller.buy_tickets(quantity).await {
                            controller.note_failure("Buy tickets", e);
                        }
                    }
                    ui::UserEvent::ClaimPrize => {
                        if let Err(e) = controller.claim_prize().await {
                            controller.note_failure("Claim prize", e);
                        }
                    }
                    ui::UserEvent::ClaimRevenue => {
                        if let Err(e) = controller.claim_revenue().await {
                            controller.note_failure("Claim revenue", e);
                        }
                    }
                    ui::UserEvent::ExecuteRaffle => {
                        if let Err(e) = controller.execute_raffle().await {
                            controller.note_failure("Execute raffle", e);
                        }
                    }
                    ui::UserEvent::ConfirmCreate {
                        token_contract,
                        token_id,
                        price_base,
                        max_tickets,
                        duration_days,
                    } => {
                        if let Err(e) = controller
                            .create_raffle(token_contract, token_id, price_base, max_tickets, duration_days)
                            .await
                        {
                            controller.note_failure("Create raffle", e);
                        }
                    }
                    ui::UserEvent::ConfirmAuthorize { contract } => {
                        if let Err(e) = controller.authorize_contract(&contract).await {
                            controller.note_failure("Authorize contract", e);
                        }
                    }
                    ui::UserEvent::ConfirmMint { token_contract } => {
                        if let Err(e) = controller.mint(token_contract).await {
                            controller.note_failure("Mint", e);
                        }
                    }
                    ui::UserEvent::ConfirmWalletSwitch { name } => {
                        // Password entry needs the plain terminal back.
                        ui::terminal_exit()?;
                        let switched = controller.switch_wallet(&name).await;
                        ui::terminal_enter(ui_state)?;
                        if let Err(e) = switched {
                            controller.note_failure("Switch wallet", e);
                        }
                    }
                }
                last_snapshot = controller.snapshot().await?;
                ui::draw(ui_state, &last_snapshot)?;
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    #![allow(non_snake_case)]
    use super::*;
    use tempdir::TempDir;

    fn store_in(dir: &TempDir, env: deployment::DeploymentEnv) -> deployment::DeploymentStore {
        deployment::DeploymentStore::new_in(dir.path(), env)
            .expect("store should initialize in a temp dir")
    }

    #[test]
    fn network_target__maps_onto_deployment_envs() {
        // given
        let testnet = NetworkTarget::Testnet {
            url: DEFAULT_TESTNET_RPC_URL.to_string(),
        };
        let devnet = NetworkTarget::Devnet {
            url: DEFAULT_DEVNET_RPC_URL.to_string(),
        };
        let local = NetworkTarget::LocalNode {
            url: DEFAULT_LOCAL_RPC_URL.to_string(),
        };

        // when / then
        assert_eq!(testnet.deployment_env(), deployment::DeploymentEnv::Test);
        assert_eq!(devnet.deployment_env(), deployment::DeploymentEnv::Dev);
        assert_eq!(local.deployment_env(), deployment::DeploymentEnv::Local);
    }

    #[test]
    fn format_deployment_summary__reports_missing_records() {
        // given
        let dir = TempDir::new("raffle-deployments").expect("temp dir");
        let store = store_in(&dir, deployment::DeploymentEnv::Local);

        // when
        let summary = format_deployment_summary(
            deployment::DeploymentEnv::Local,
            DEFAULT_LOCAL_RPC_URL,
            &store,
            None,
        );

        // then
        assert!(summary.contains("No registry deployment recorded for Local"));
        assert!(summary.contains("(none recorded)"));
        assert!(summary.contains("deployments.json"));
    }

    #[test]
    fn format_deployment_summary__lists_the_recorded_deployment() {
        // given
        let dir = TempDir::new("raffle-deployments").expect("temp dir");
        let store = store_in(&dir, deployment::DeploymentEnv::Test);
        let record = deployment::DeploymentRecord {
            deployed_at: String::from("2024-11-02T10:00:00Z"),
            registry_contract_id: String::from("0xabc123"),
            network_url: String::from(DEFAULT_TESTNET_RPC_URL),
            note: Some(String::from("initial rollout")),
        };

        // when
        let summary = format_deployment_summary(
            deployment::DeploymentEnv::Test,
            DEFAULT_TESTNET_RPC_URL,
            &store,
            Some(&record),
        );

        // then
        assert!(summary.contains("0xabc123"));
        assert!(summary.contains("initial rollout"));
    }
}
