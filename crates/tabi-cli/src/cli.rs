//! Command handlers wiring core operations to terminal output.

use anyhow::Result;
use tabi_core::{
    bookings,
    display::{
        ChecklistToggleResult, DateList, DaySummary, DayTimeline, RenameResult, SearchResults,
        ToggleResult, Wallet,
    },
    guide,
    params::{BookingQuery, DayQuery, GuideQuery, RenameTrip, ToggleItem},
    schedule, TripSession,
};

use crate::{
    args::{BookingCommands, ScheduleCommands, TripCommands},
    renderer::TerminalRenderer,
};

/// Command dispatcher holding the open session and the output renderer.
pub struct Cli {
    session: TripSession,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(session: TripSession, renderer: TerminalRenderer) -> Self {
        Self { session, renderer }
    }

    pub async fn handle_schedule_command(mut self, command: ScheduleCommands) -> Result<()> {
        match command {
            ScheduleCommands::Days => self.list_days(),
            ScheduleCommands::Show(args) => self.show_day(&args.into()),
            ScheduleCommands::Toggle(args) => self.toggle(args.into()).await,
            ScheduleCommands::Guide(args) => self.guide(args.into()).await,
        }
    }

    pub fn handle_booking_command(self, command: BookingCommands) -> Result<()> {
        match command {
            BookingCommands::List(args) => self.list_bookings(&args.into()),
        }
    }

    pub async fn handle_trip_command(mut self, command: TripCommands) -> Result<()> {
        match command {
            TripCommands::Show => {
                self.renderer.render(&self.session.document().to_string());
                Ok(())
            }
            TripCommands::Rename(args) => self.rename(args.into()).await,
        }
    }

    /// Default action without a subcommand: the first scheduled day.
    pub fn show_default_day(self) -> Result<()> {
        self.show_day(&DayQuery::default())
    }

    fn list_days(&self) -> Result<()> {
        let items = &self.session.document().schedule;
        let summaries = schedule::distinct_dates_sorted(items)
            .into_iter()
            .map(|date| {
                let day = schedule::filter_by_date(items, &date);
                let total = day.len();
                let completed = day.iter().filter(|item| item.is_completed).count();
                DaySummary {
                    date,
                    total,
                    completed,
                }
            })
            .collect();

        self.renderer.render(&DateList(summaries).to_string());
        Ok(())
    }

    fn show_day(&self, query: &DayQuery) -> Result<()> {
        let items = &self.session.document().schedule;
        let term = query.search.as_deref().unwrap_or("");

        // A non-blank search term searches the whole schedule; the selected
        // date only applies otherwise.
        if !term.trim().is_empty() {
            let hits = schedule::visible_for_day(items, "", term)
                .into_iter()
                .cloned()
                .collect();
            let results = SearchResults {
                term: term.trim().to_string(),
                items: hits,
            };
            self.renderer.render(&results.to_string());
            return Ok(());
        }

        let dates = schedule::distinct_dates_sorted(items);
        let date = match query.date.clone().or_else(|| dates.first().cloned()) {
            Some(date) => date,
            None => {
                self.renderer.render("No scheduled days.\n");
                return Ok(());
            }
        };

        let day_items: Vec<_> = schedule::visible_for_day(items, &date, "")
            .into_iter()
            .cloned()
            .collect();
        let timeline = DayTimeline {
            date,
            items: day_items,
        };
        self.renderer.render(&timeline.to_string());
        Ok(())
    }

    async fn toggle(&mut self, params: ToggleItem) -> Result<()> {
        match params.check_id {
            Some(check_id) => {
                let entry = self
                    .session
                    .toggle_checklist_item(&params.item_id, &check_id)
                    .await
                    .cloned();
                match entry {
                    Some(entry) => {
                        let item_title = self
                            .find_item_title(&params.item_id)
                            .unwrap_or_else(|| params.item_id.clone());
                        let result = ChecklistToggleResult { item_title, entry };
                        self.renderer.render(&result.to_string());
                    }
                    None => self.renderer.render(&format!(
                        "No checklist entry `{check_id}` under item `{}`.\n",
                        params.item_id
                    )),
                }
            }
            None => {
                let item = self.session.toggle_item(&params.item_id).await.cloned();
                match item {
                    Some(item) => {
                        self.renderer.render(&ToggleResult::new(item).to_string());
                    }
                    None => self
                        .renderer
                        .render(&format!("No schedule item with id `{}`.\n", params.item_id)),
                }
            }
        }
        Ok(())
    }

    async fn guide(&mut self, query: GuideQuery) -> Result<()> {
        let target = self
            .session
            .document()
            .schedule
            .iter()
            .find(|item| item.id == query.item_id)
            .map(|item| (item.title.clone(), item.location.clone()));

        let (title, location) = match target {
            Some(found) => found,
            None => {
                self.renderer
                    .render(&format!("No schedule item with id `{}`.\n", query.item_id));
                return Ok(());
            }
        };

        let info = guide::generate_guide_info(&location, &title).await;

        // Attach the generated payload to the item so it persists with the
        // document, then show it.
        let new_schedule = self
            .session
            .document()
            .schedule
            .iter()
            .map(|item| {
                if item.id == query.item_id {
                    let mut item = item.clone();
                    item.guide_info = Some(info.clone());
                    item
                } else {
                    item.clone()
                }
            })
            .collect();
        self.session.update_schedule(new_schedule).await;

        self.renderer
            .render(&format!("## Guide — {title}\n\n{info}"));
        Ok(())
    }

    fn list_bookings(&self, query: &BookingQuery) -> Result<()> {
        let term = query.search.as_deref().unwrap_or("");
        let wallet = Wallet(
            bookings::filter_bookings(&self.session.document().bookings, query.kind, term)
                .into_iter()
                .cloned()
                .collect(),
        );

        self.renderer.render(&wallet.to_string());
        Ok(())
    }

    async fn rename(&mut self, params: RenameTrip) -> Result<()> {
        self.session.update_trip_name(params.name.clone()).await;
        let result = RenameResult { name: params.name };
        self.renderer.render(&result.to_string());

        if self.session.is_detached() {
            self.renderer
                .render("(storage unavailable — changes will not outlive this run)\n");
        }
        Ok(())
    }

    fn find_item_title(&self, item_id: &str) -> Option<String> {
        self.session
            .document()
            .schedule
            .iter()
            .find(|item| item.id == item_id)
            .map(|item| item.title.clone())
    }
}
