use crate::client::AppSnapshot;
use color_eyre::eyre::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use fuels::prelude::ContractId;
use open_raffles::{
    format,
    raffle_types::AuthorizedContract,
    views::{BuyControl, ClaimPrizeView, ClaimRevenueView, RaffleCard, RaffleStatus, SOLD_OUT_MESSAGE},
};
use ratatui::prelude::*;
use ratatui::widgets::*;
use std::io::stdout;

pub enum UserEvent {
    Quit,
    Redraw,
    OpenDetail { token_contract: ContractId, token_id: u64 },
    CloseDetail,
    ConfirmBuy { quantity: u64 },
    ClaimPrize,
    ClaimRevenue,
    ExecuteRaffle,
    ConfirmCreate {
        token_contract: ContractId,
        token_id: u64,
        price_base: u64,
        max_tickets: u64,
        duration_days: u64,
    },
    ConfirmAuthorize { contract: String },
    ConfirmMint { token_contract: ContractId },
    ConfirmWalletSwitch { name: String },
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Tab {
    All,
    Mine,
    Admin,
}

/// Key handling needs to know which detail actions the snapshot offers.
#[derive(Clone, Copy, Debug)]
struct DetailKeys {
    buy: BuyControl,
    unit_price_base: u64,
    claim_prize: bool,
    claim_revenue: bool,
}

#[derive(Debug)]
pub struct UiState {
    mode: Mode,
    tab: Tab,
    card_idx: usize,
    cards: Vec<RaffleCard>,
    my_cards: Vec<RaffleCard>,
    authorized: Vec<AuthorizedContract>,
    supplies: Vec<(ContractId, u64)>,
    wallet_names: Vec<String>,
    is_admin: bool,
    detail: Option<DetailKeys>,
    terminal: Option<Terminal<CrosstermBackend<std::io::Stdout>>>,
}

impl Default for UiState {
    fn default() -> Self {
        UiState {
            mode: Mode::Normal,
            tab: Tab::All,
            card_idx: 0,
            cards: Vec::new(),
            my_cards: Vec::new(),
            authorized: Vec::new(),
            supplies: Vec::new(),
            wallet_names: Vec::new(),
            is_admin: false,
            detail: None,
            terminal: None,
        }
    }
}

#[derive(Clone, Debug, Default)]
enum Mode {
    #[default]
    Normal,
    BuyModal(BuyState),
    CreateModal(CreateState),
    AuthorizeModal(AuthorizeState),
    MintModal(MintState),
    WalletModal(WalletState),
    QuitModal,
}

#[derive(Clone, Debug)]
struct BuyState { quantity: u64 }

impl Default for BuyState { fn default() -> Self { BuyState { quantity: 1 } } }

#[derive(Clone, Debug)]
struct CreateState {
    field: usize,
    collection_idx: usize,
    token_id: u64,
    price_text: String,
    max_tickets: u64,
    duration_days: u64,
}

impl Default for CreateState {
    fn default() -> Self {
        CreateState {
            field: 0,
            collection_idx: 0,
            token_id: 0,
            price_text: String::new(),
            max_tickets: 10,
            duration_days: 7,
        }
    }
}

const CREATE_FIELDS: usize = 5;

#[derive(Clone, Debug, Default)]
struct AuthorizeState { input: String }

#[derive(Clone, Debug, Default)]
struct MintState { idx: usize }

#[derive(Clone, Debug, Default)]
struct WalletState { idx: usize }

pub fn terminal_enter(state: &mut UiState) -> Result<()> {
    enable_raw_mode()?;
    crossterm::execute!(
        std::io::stdout(),
        crossterm::terminal::EnterAlternateScreen,
        crossterm::event::EnableMouseCapture
    )?;
    // Create a single persistent Terminal to preserve buffers across draws
    let backend = CrosstermBackend::new(stdout());
    let terminal = Terminal::new(backend)?;
    state.terminal = Some(terminal);
    Ok(())
}

pub fn terminal_exit() -> Result<()> {
    disable_raw_mode()?;
    crossterm::execute!(
        std::io::stdout(),
        crossterm::event::DisableMouseCapture,
        crossterm::terminal::LeaveAlternateScreen
    )?;
    Ok(())
}

pub fn draw(state: &mut UiState, snap: &AppSnapshot) -> Result<()> {
    // keep a cache of listing data for modal and selection handling
    state.cards = snap.cards.clone();
    state.my_cards = snap.my_cards.clone();
    state.authorized = snap.authorized.clone();
    state.supplies = snap.supplies.clone();
    state.wallet_names = snap.wallet_names.clone();
    state.is_admin = snap.is_admin;
    state.detail = snap.detail.as_ref().map(|d| DetailKeys {
        buy: d.buy,
        unit_price_base: d.unit_price_base,
        claim_prize: d.claim_prize == ClaimPrizeView::Button,
        claim_revenue: matches!(d.claim_revenue, ClaimRevenueView::Button { .. }),
    });
    if !state.is_admin && state.tab == Tab::Admin {
        state.tab = Tab::All;
    }
    let visible = visible_cards(state).len();
    if visible == 0 {
        state.card_idx = 0;
    } else if state.card_idx >= visible {
        state.card_idx = visible - 1;
    }
    if let Some(mut term) = state.terminal.take() {
        term.draw(|f| ui(f, state, snap))?;
        state.terminal = Some(term);
    }
    Ok(())
}

fn visible_cards(state: &UiState) -> &[RaffleCard] {
    match state.tab {
        Tab::All => &state.cards,
        Tab::Mine => &state.my_cards,
        Tab::Admin => &[],
    }
}

pub async fn next_event(state: &mut UiState) -> Result<UserEvent> {
    loop {
        if let Event::Key(k) = event::read()? {
            if k.kind != KeyEventKind::Press { continue; }
            // Modal handling
            match &mut state.mode {
                Mode::BuyModal(bs) => {
                    match k.code {
                        KeyCode::Esc => { state.mode = Mode::Normal; return Ok(UserEvent::Redraw); }
                        KeyCode::Enter => { let quantity = bs.quantity.max(1); state.mode = Mode::Normal; return Ok(UserEvent::ConfirmBuy { quantity }); }
                        KeyCode::Up | KeyCode::Char('+') => { bs.quantity = bs.quantity.saturating_add(1); return Ok(UserEvent::Redraw); }
                        KeyCode::Down | KeyCode::Char('-') => { bs.quantity = bs.quantity.saturating_sub(1).max(1); return Ok(UserEvent::Redraw); }
                        KeyCode::Backspace => { bs.quantity /= 10; return Ok(UserEvent::Redraw); }
                        KeyCode::Char(c) if c.is_ascii_digit() => { let d = c.to_digit(10).unwrap() as u64; bs.quantity = bs.quantity.saturating_mul(10).saturating_add(d); return Ok(UserEvent::Redraw); }
                        _ => {}
                    }
                }
                Mode::CreateModal(cs) => {
                    match k.code {
                        KeyCode::Esc => { state.mode = Mode::Normal; return Ok(UserEvent::Redraw); }
                        KeyCode::Up => { if cs.field > 0 { cs.field -= 1; } return Ok(UserEvent::Redraw); }
                        KeyCode::Down | KeyCode::Tab => { cs.field = (cs.field + 1) % CREATE_FIELDS; return Ok(UserEvent::Redraw); }
                        KeyCode::Left if cs.field == 0 => { if cs.collection_idx > 0 { cs.collection_idx -= 1; } return Ok(UserEvent::Redraw); }
                        KeyCode::Right if cs.field == 0 => { let max = state.authorized.len().saturating_sub(1); cs.collection_idx = (cs.collection_idx + 1).min(max); return Ok(UserEvent::Redraw); }
                        KeyCode::Backspace => {
                            match cs.field {
                                1 => cs.token_id /= 10,
                                2 => { cs.price_text.pop(); }
                                3 => cs.max_tickets /= 10,
                                4 => cs.duration_days /= 10,
                                _ => {}
                            }
                            return Ok(UserEvent::Redraw);
                        }
                        KeyCode::Char(c) if c.is_ascii_digit() || (c == '.' && cs.field == 2) => {
                            let d = c.to_digit(10).unwrap_or(0) as u64;
                            match cs.field {
                                1 => cs.token_id = cs.token_id.saturating_mul(10).saturating_add(d),
                                2 => cs.price_text.push(c),
                                3 => cs.max_tickets = cs.max_tickets.saturating_mul(10).saturating_add(d),
                                4 => cs.duration_days = cs.duration_days.saturating_mul(10).saturating_add(d),
                                _ => {}
                            }
                            return Ok(UserEvent::Redraw);
                        }
                        KeyCode::Enter => {
                            let Some(auth) = state.authorized.get(cs.collection_idx) else { return Ok(UserEvent::Redraw); };
                            let Ok(price_display) = cs.price_text.parse::<f64>() else { return Ok(UserEvent::Redraw); };
                            if cs.max_tickets == 0 || cs.duration_days == 0 { return Ok(UserEvent::Redraw); }
                            let ev = UserEvent::ConfirmCreate {
                                token_contract: auth.instance,
                                token_id: cs.token_id,
                                price_base: format::base_units(price_display),
                                max_tickets: cs.max_tickets,
                                duration_days: cs.duration_days,
                            };
                            state.mode = Mode::Normal;
                            return Ok(ev);
                        }
                        _ => {}
                    }
                }
                Mode::AuthorizeModal(az) => {
                    match k.code {
                        KeyCode::Esc => { state.mode = Mode::Normal; return Ok(UserEvent::Redraw); }
                        KeyCode::Backspace => { az.input.pop(); return Ok(UserEvent::Redraw); }
                        KeyCode::Char(c) if c.is_ascii_alphanumeric() => { az.input.push(c); return Ok(UserEvent::Redraw); }
                        KeyCode::Enter => {
                            if az.input.is_empty() { return Ok(UserEvent::Redraw); }
                            let contract = az.input.clone();
                            state.mode = Mode::Normal;
                            return Ok(UserEvent::ConfirmAuthorize { contract });
                        }
                        _ => {}
                    }
                }
                Mode::MintModal(ms) => {
                    match k.code {
                        KeyCode::Esc => { state.mode = Mode::Normal; return Ok(UserEvent::Redraw); }
                        KeyCode::Up => { if ms.idx > 0 { ms.idx -= 1; } return Ok(UserEvent::Redraw); }
                        KeyCode::Down => { let max = state.authorized.len().saturating_sub(1); ms.idx = (ms.idx + 1).min(max); return Ok(UserEvent::Redraw); }
                        KeyCode::Enter => {
                            if let Some(auth) = state.authorized.get(ms.idx) {
                                let token_contract = auth.instance;
                                state.mode = Mode::Normal;
                                return Ok(UserEvent::ConfirmMint { token_contract });
                            }
                            return Ok(UserEvent::Redraw);
                        }
                        _ => {}
                    }
                }
                Mode::WalletModal(ws) => {
                    match k.code {
                        KeyCode::Esc => { state.mode = Mode::Normal; return Ok(UserEvent::Redraw); }
                        KeyCode::Up => { if ws.idx > 0 { ws.idx -= 1; } return Ok(UserEvent::Redraw); }
                        KeyCode::Down => { let max = state.wallet_names.len().saturating_sub(1); ws.idx = (ws.idx + 1).min(max); return Ok(UserEvent::Redraw); }
                        KeyCode::Enter => {
                            if let Some(name) = state.wallet_names.get(ws.idx).cloned() {
                                state.mode = Mode::Normal;
                                return Ok(UserEvent::ConfirmWalletSwitch { name });
                            }
                            return Ok(UserEvent::Redraw);
                        }
                        _ => {}
                    }
                }
                Mode::QuitModal => {
                    match k.code {
                        KeyCode::Char('y') | KeyCode::Char('Y') => { return Ok(UserEvent::Quit); }
                        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => { state.mode = Mode::Normal; return Ok(UserEvent::Redraw); }
                        _ => {}
                    }
                }
                Mode::Normal => {}
            }
            // Detail view takes its own keys before the listing map
            if let Some(detail) = state.detail {
                match k.code {
                    KeyCode::Esc => return Ok(UserEvent::CloseDetail),
                    KeyCode::Char('b') if detail.buy == BuyControl::Quantity => {
                        state.mode = Mode::BuyModal(BuyState::default());
                        return Ok(UserEvent::Redraw);
                    }
                    KeyCode::Char('p') if detail.claim_prize => return Ok(UserEvent::ClaimPrize),
                    KeyCode::Char('v') if detail.claim_revenue => return Ok(UserEvent::ClaimRevenue),
                    KeyCode::Char('x') => return Ok(UserEvent::ExecuteRaffle),
                    KeyCode::Char('q') => { state.mode = Mode::QuitModal; return Ok(UserEvent::Redraw); }
                    _ => continue,
                }
            }
            return Ok(match k.code {
                KeyCode::Char('q') | KeyCode::Esc => { state.mode = Mode::QuitModal; UserEvent::Redraw },
                KeyCode::Char('1') => { state.tab = Tab::All; state.card_idx = 0; UserEvent::Redraw },
                KeyCode::Char('2') => { state.tab = Tab::Mine; state.card_idx = 0; UserEvent::Redraw },
                KeyCode::Char('3') if state.is_admin => { state.tab = Tab::Admin; UserEvent::Redraw },
                KeyCode::Left | KeyCode::Up => {
                    if state.card_idx > 0 { state.card_idx -= 1; }
                    UserEvent::Redraw
                }
                KeyCode::Right | KeyCode::Down => {
                    let max = visible_cards(state).len().saturating_sub(1);
                    state.card_idx = (state.card_idx + 1).min(max);
                    UserEvent::Redraw
                }
                KeyCode::Enter => {
                    match visible_cards(state).get(state.card_idx) {
                        Some(card) => UserEvent::OpenDetail {
                            token_contract: card.token_contract,
                            token_id: card.token_id,
                        },
                        None => continue,
                    }
                }
                KeyCode::Char('n') => { state.mode = Mode::CreateModal(CreateState::default()); UserEvent::Redraw },
                KeyCode::Char('m') => { state.mode = Mode::MintModal(MintState::default()); UserEvent::Redraw },
                KeyCode::Char('a') if state.is_admin => { state.mode = Mode::AuthorizeModal(AuthorizeState::default()); UserEvent::Redraw },
                KeyCode::Char('w') => { state.mode = Mode::WalletModal(WalletState::default()); UserEvent::Redraw },
                _ => continue,
            });
        }
    }
}

fn ui(f: &mut Frame, state: &UiState, snap: &AppSnapshot) {
    // Clear the whole frame to avoid leftover fragments
    f.render_widget(Clear, f.area());
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // status
            Constraint::Length(3), // tabs
            Constraint::Min(10),   // listing grid or detail
            Constraint::Length(6), // errors + help
        ])
        .split(f.area());

    draw_top(f, chunks[0], snap);
    draw_tabs(f, state, chunks[1]);
    match &snap.detail {
        Some(detail) => draw_detail(f, chunks[2], detail),
        None => match state.tab {
            Tab::Admin => draw_admin(f, state, chunks[2]),
            _ => draw_cards(f, chunks[2], visible_cards(state), state.card_idx),
        },
    }
    draw_bottom(f, state, chunks[3], snap);
    draw_modals(f, state);
}

fn draw_top(f: &mut Frame, area: Rect, snap: &AppSnapshot) {
    let admin = if snap.is_admin { " | admin" } else { "" };
    let gauge = Paragraph::new(format!(
        "Network: {} | Wallet: {} ({}) | Balance: {} coins{}\n{}",
        snap.network_label,
        snap.wallet_name,
        snap.account_short,
        format::format_coins(snap.balance_base),
        admin,
        snap.status
    ))
    .style(Style::default())
    .block(Block::default().borders(Borders::ALL).title("Status"));
    f.render_widget(gauge, area);
}

fn draw_tabs(f: &mut Frame, state: &UiState, area: Rect) {
    let mut spans = vec![
        tab_span("[1] All raffles", state.tab == Tab::All),
        Span::raw("  "),
        tab_span("[2] My raffles", state.tab == Tab::Mine),
    ];
    if state.is_admin {
        spans.push(Span::raw("  "));
        spans.push(tab_span("[3] Admin", state.tab == Tab::Admin));
    }
    let tabs = Paragraph::new(Line::from(spans))
        .block(Block::default().borders(Borders::ALL).title("View"));
    f.render_widget(tabs, area);
}

fn tab_span(label: &str, active: bool) -> Span<'_> {
    if active {
        Span::styled(label, Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
    } else {
        Span::raw(label)
    }
}

fn draw_cards(f: &mut Frame, area: Rect, cards: &[RaffleCard], selected: usize) {
    if cards.is_empty() {
        let empty = Paragraph::new("No raffles yet")
            .block(Block::default().borders(Borders::ALL).title("Raffles"));
        f.render_widget(empty, area);
        return;
    }
    let cols: u16 = 4;
    let col_w = area.width / cols;
    let row_h: u16 = 8;
    let visible_rows = (area.height / row_h).max(1);
    for (i, card) in cards.iter().enumerate() {
        let c = (i as u16) % cols;
        let r = (i as u16) / cols;
        if r >= visible_rows {
            break;
        }
        let rect = Rect::new(area.x + c * col_w, area.y + r * row_h, col_w, row_h);
        let is_selected = i == selected;
        let status_style = match card.status {
            RaffleStatus::Active => Style::default().fg(Color::Green),
            RaffleStatus::Finalized => Style::default().fg(Color::DarkGray),
        };
        let lines = vec![
            Line::styled(card.status.label(), status_style),
            Line::from(format!("Price: {:.2} coins", card.price_display)),
            Line::from(format!("Tickets: {}/{}", card.tickets_sold, card.max_tickets)),
            Line::from(format!("Ends: {}", card.end_date)),
        ];
        let block = Block::default().borders(Borders::ALL).title(Span::styled(
            card.title.clone(),
            if is_selected {
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            },
        ));
        f.render_widget(&block, rect);
        let inner = block.inner(rect);
        f.render_widget(Paragraph::new(lines), inner);
    }
}

fn draw_admin(f: &mut Frame, state: &UiState, area: Rect) {
    let mut lines = Vec::new();
    if state.authorized.is_empty() {
        lines.push(Line::from("No authorized collections"));
    } else {
        lines.push(Line::from("Authorized collections:"));
        for auth in &state.authorized {
            let supply = state
                .supplies
                .iter()
                .find(|(id, _)| *id == auth.instance)
                .map(|(_, s)| *s);
            let supply_text = match supply {
                Some(s) => format!("supply {s}"),
                None => String::from("supply ?"),
            };
            lines.push(Line::from(format!(
                "  {} {} {}",
                auth.symbol,
                format::short_address(&format!("0x{}", hex::encode(auth.instance))),
                supply_text
            )));
        }
    }
    lines.push(Line::from(""));
    lines.push(Line::from("a authorize contract | m mint | n new raffle"));
    let panel = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title("Admin"));
    f.render_widget(panel, area);
}

fn draw_detail(f: &mut Frame, area: Rect, detail: &crate::client::RaffleDetail) {
    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let card = &detail.card;
    let status_style = match card.status {
        RaffleStatus::Active => Style::default().fg(Color::Green),
        RaffleStatus::Finalized => Style::default().fg(Color::DarkGray),
    };
    let mut lines = vec![
        Line::styled(card.status.label(), status_style),
        Line::from(format!("Owner: {}", detail.owner_short)),
        Line::from(format!(
            "Price: {} coins per ticket",
            format::format_coins(detail.unit_price_base)
        )),
        Line::from(format!("Tickets: {}/{}", card.tickets_sold, card.max_tickets)),
        Line::from(format!("Starts: {}", detail.start_date)),
        Line::from(format!("Ends: {}", card.end_date)),
    ];
    if let Some(winner) = &detail.winner_short {
        lines.push(Line::from(format!("Winner: {winner}")));
    }
    match &card.image_url {
        Some(url) => lines.push(Line::from(format!("Image: {url}"))),
        None => lines.push(Line::styled("(no image)", Style::default().fg(Color::DarkGray))),
    }
    lines.push(Line::from(""));
    match detail.buy {
        BuyControl::Quantity => lines.push(Line::from("b buy tickets")),
        BuyControl::SoldOut => {
            lines.push(Line::styled(SOLD_OUT_MESSAGE, Style::default().fg(Color::Red)))
        }
        BuyControl::Hidden => {}
    }
    match detail.claim_prize {
        ClaimPrizeView::Button => lines.push(Line::from("p claim prize")),
        ClaimPrizeView::ClaimedNote => {
            lines.push(Line::styled("Prize already claimed", Style::default().fg(Color::DarkGray)))
        }
        ClaimPrizeView::Hidden => {}
    }
    match detail.claim_revenue {
        ClaimRevenueView::Button { amount_base } => lines.push(Line::from(format!(
            "v claim revenue ({} coins)",
            format::format_coins(amount_base)
        ))),
        ClaimRevenueView::ClaimedNote => {
            lines.push(Line::styled("Revenue already claimed", Style::default().fg(Color::DarkGray)))
        }
        ClaimRevenueView::Hidden => {}
    }
    let info = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(card.title.clone()));
    f.render_widget(info, halves[0]);

    let mut ticket_lines = Vec::new();
    if detail.tickets.is_empty() {
        ticket_lines.push(Line::from("No tickets sold"));
    } else {
        ticket_lines.push(Line::from(format!(
            "{:<16} {:>7}  {}",
            "Owner", "Tickets", "Winner"
        )));
        for row in &detail.tickets {
            let line = format!("{:<16} {:>7}  {}", row.owner, row.count, row.winner_marker());
            if row.winner {
                ticket_lines.push(Line::styled(line, Style::default().fg(Color::Yellow)));
            } else {
                ticket_lines.push(Line::from(line));
            }
        }
    }
    let tickets = Paragraph::new(ticket_lines)
        .block(Block::default().borders(Borders::ALL).title("Tickets"));
    f.render_widget(tickets, halves[1]);
}

fn draw_bottom(f: &mut Frame, state: &UiState, area: Rect, snap: &AppSnapshot) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Length(3)])
        .split(area);

    // Errors/logs
    let mut lines: Vec<Line> = Vec::new();
    if snap.errors.is_empty() {
        lines.push(Line::from("No errors"));
    } else {
        for e in &snap.errors {
            lines.push(Line::from(e.clone()));
        }
    }
    let errors = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title("Errors"));
    let color = if snap.cards.is_empty() && snap.my_cards.is_empty() {
        Color::DarkGray
    } else if snap.errors.is_empty() {
        Color::Green
    } else {
        Color::Red
    };
    f.render_widget(errors.style(Style::default().fg(color)), chunks[0]);

    // Help
    let help_text = if state.detail.is_some() {
        "b buy | p claim prize | v claim revenue | x execute | Esc back | q quit"
    } else if state.is_admin {
        "arrows select | Enter open | 1/2/3 tabs | n new raffle | m mint | a authorize | w wallet | q quit"
    } else {
        "arrows select | Enter open | 1/2 tabs | n new raffle | m mint | w wallet | q quit"
    };
    let help = Paragraph::new(help_text)
        .block(Block::default().borders(Borders::ALL).title("Help"));
    f.render_widget(help, chunks[1]);
}

fn draw_modals(f: &mut Frame, state: &UiState) {
    match &state.mode {
        Mode::BuyModal(bs) => {
            let area = centered_rect(40, 30, f.area());
            let block = Block::default().borders(Borders::ALL).title("Buy Tickets");
            let unit_price = state.detail.map(|d| d.unit_price_base).unwrap_or(0);
            let p = Paragraph::new(format!(
                "Quantity: {}\nTotal: {:.2} coins\nEnter=confirm Esc=cancel +/- or digits to edit",
                bs.quantity,
                format::total_price_display(unit_price, bs.quantity)
            ));
            f.render_widget(Clear, area);
            f.render_widget(block.clone(), area);
            f.render_widget(p, block.inner(area));
        }
        Mode::CreateModal(cs) => {
            let area = centered_rect(60, 50, f.area());
            let block = Block::default().borders(Borders::ALL).title("New Raffle");
            let collection = state
                .authorized
                .get(cs.collection_idx)
                .map(|a| a.symbol.clone())
                .unwrap_or_else(|| String::from("(none authorized)"));
            let rows = [
                format!("Collection: {collection} (use arrows)"),
                format!("Token id: {}", cs.token_id),
                format!("Price (coins): {}", cs.price_text),
                format!("Max tickets: {}", cs.max_tickets),
                format!("Duration (days): {}", cs.duration_days),
            ];
            let mut lines = Vec::new();
            for (i, row) in rows.iter().enumerate() {
                let cur = if i == cs.field { ">" } else { " " };
                lines.push(Line::from(format!("{cur} {row}")));
            }
            lines.push(Line::from(""));
            lines.push(Line::from("Enter=create Esc=cancel Tab/arrows move fields"));
            f.render_widget(Clear, area);
            f.render_widget(block.clone(), area);
            f.render_widget(Paragraph::new(lines), block.inner(area));
        }
        Mode::AuthorizeModal(az) => {
            let area = centered_rect(60, 30, f.area());
            let block = Block::default()
                .borders(Borders::ALL)
                .title("Authorize Token Contract");
            let p = Paragraph::new(format!(
                "Contract id: {}\nEnter=authorize Esc=cancel",
                az.input
            ));
            f.render_widget(Clear, area);
            f.render_widget(block.clone(), area);
            f.render_widget(p, block.inner(area));
        }
        Mode::MintModal(ms) => {
            let area = centered_rect(50, 40, f.area());
            let block = Block::default().borders(Borders::ALL).title("Mint Token");
            let mut lines = Vec::new();
            if state.authorized.is_empty() {
                lines.push(Line::from("No authorized collections"));
            } else {
                for (i, auth) in state.authorized.iter().enumerate() {
                    let cur = if i == ms.idx { ">" } else { " " };
                    lines.push(Line::from(format!("{} {}", cur, auth.symbol)));
                }
                lines.push(Line::from("Enter=mint Esc=close arrows move"));
            }
            f.render_widget(Clear, area);
            f.render_widget(block.clone(), area);
            f.render_widget(Paragraph::new(lines), block.inner(area));
        }
        Mode::WalletModal(ws) => {
            let area = centered_rect(50, 40, f.area());
            let block = Block::default().borders(Borders::ALL).title("Switch Wallet");
            let mut lines = Vec::new();
            if state.wallet_names.is_empty() {
                lines.push(Line::from("No wallets found"));
            } else {
                for (i, name) in state.wallet_names.iter().enumerate() {
                    let cur = if i == ws.idx { ">" } else { " " };
                    lines.push(Line::from(format!("{cur} {name}")));
                }
                lines.push(Line::from("Enter=switch Esc=close arrows move"));
            }
            f.render_widget(Clear, area);
            f.render_widget(block.clone(), area);
            f.render_widget(Paragraph::new(lines), block.inner(area));
        }
        Mode::QuitModal => {
            let area = centered_rect(40, 20, f.area());
            let block = Block::default().borders(Borders::ALL).title("Confirm Quit");
            let p = Paragraph::new("Quit the raffle browser? (Y/N)");
            f.render_widget(Clear, area);
            f.render_widget(block.clone(), area);
            f.render_widget(p, block.inner(area));
        }
        Mode::Normal => {}
    }
}

fn centered_rect(w_percent: u16, h_percent: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - h_percent) / 2),
            Constraint::Percentage(h_percent),
            Constraint::Percentage((100 - h_percent) / 2),
        ])
        .split(r);

    let vertical = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - w_percent) / 2),
            Constraint::Percentage(w_percent),
            Constraint::Percentage((100 - w_percent) / 2),
        ])
        .split(popup_layout[1]);

    vertical[1]
}
