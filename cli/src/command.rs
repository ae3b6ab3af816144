// SPDX-FileCopyrightText: 2026 roteiro contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, path::PathBuf};

use chrono::Local;
use colored::Colorize;
use roteiro_core::{
    ActiveTripStore, ActivityDraft, ActivityService, RangeSelection, Trip, TripDraft, TripService,
    build_sections, combine_date_and_hour,
};

use crate::{
    calendar,
    cli::{AddActivityArgs, NewArgs, ShowArgs},
    config::Config,
    store::Store,
    timeline_formatter,
};

/// Plan a new trip: fold the tapped days through the selector, create the
/// trip and remember it as the active one.
pub fn command_new(config: Option<PathBuf>, args: NewArgs) -> Result<(), Box<dyn Error>> {
    tracing::debug!("parsing configuration");
    let config = Config::parse(config)?;
    let mut store = Store::load_or_new(&config.data_dir()?)?;

    let selection = select_all(&args.taps);
    let (Some(starts_at), Some(ends_at)) = (selection.starts_at(), selection.ends_at()) else {
        return Err("Preencha a data de ida e volta da viagem.".into());
    };
    if args.destination.trim().len() < 4 {
        return Err("O destino deve ter pelo menos 4 caracteres.".into());
    }

    let trip = TripService::create(
        &mut store,
        &TripDraft {
            destination: args.destination.trim().to_string(),
            starts_at,
            ends_at,
            emails_to_invite: args.invites,
        },
    )?;
    store.save(&trip.id)?;
    store.dump()?;

    print!("{}", calendar::render_selection(&selection, config.locale));
    if let Some(text) = selection.format_text(config.locale) {
        println!("\n{} {}", trip.destination.bold(), text);
    }
    println!("{}", "Viagem criada com sucesso!".green());
    Ok(())
}

/// Show the active trip header and calendar; with taps, preview how a new
/// selection would look without saving anything.
pub fn command_show(config: Option<PathBuf>, args: ShowArgs) -> Result<(), Box<dyn Error>> {
    tracing::debug!("parsing configuration");
    let config = Config::parse(config)?;
    let store = Store::load_or_new(&config.data_dir()?)?;
    let trip = active_trip(&store)?;

    let selection = select_all(&[trip.starts_at, trip.ends_at]);
    let brief = selection
        .format_brief(config.locale)
        .unwrap_or_default();
    println!("{}  {}", trip.destination.bold(), brief.dimmed());
    print!("{}", calendar::render_selection(&selection, config.locale));

    if !args.taps.is_empty() {
        let preview = select_all(&args.taps);
        println!("\n{}", "Prévia de novas datas".bold());
        match preview.format_text(config.locale) {
            Some(text) => {
                print!("{}", calendar::render_selection(&preview, config.locale));
                println!("{text}");
            }
            None => println!("Selecione também a data de volta para completar o período."),
        }
    }
    Ok(())
}

/// List the activity timeline of the active trip.
pub fn command_activities(config: Option<PathBuf>) -> Result<(), Box<dyn Error>> {
    tracing::debug!("parsing configuration");
    let config = Config::parse(config)?;
    let store = Store::load_or_new(&config.data_dir()?)?;
    let trip = active_trip(&store)?;

    tracing::debug!(trip = %trip.id, "building timeline");
    let buckets = store.list_day_buckets(&trip.id)?;
    // One sample for the whole pass, so every row is judged against the
    // same instant.
    let now = Local::now().naive_local();
    let sections = build_sections(&buckets, now, config.locale);

    println!("{}", "Atividades".bold());
    print!("{}", timeline_formatter::render_sections(&sections));
    Ok(())
}

/// Add an activity to the active trip from a chosen day and typed hour.
pub fn command_add_activity(
    config: Option<PathBuf>,
    args: AddActivityArgs,
) -> Result<(), Box<dyn Error>> {
    tracing::debug!("parsing configuration");
    let config = Config::parse(config)?;
    let mut store = Store::load_or_new(&config.data_dir()?)?;
    let trip = active_trip(&store)?;

    if args.title.trim().is_empty() {
        return Err("Preencha todos os campos!".into());
    }
    let occurs_at = combine_date_and_hour(args.day, &args.hour)?;

    ActivityService::create(
        &mut store,
        &ActivityDraft {
            trip_id: trip.id,
            title: args.title.trim().to_string(),
            occurs_at,
        },
    )?;
    store.dump()?;

    println!("{}", "Nova atividade cadastrada com sucesso!".green());
    Ok(())
}

fn select_all(taps: &[chrono::NaiveDate]) -> RangeSelection {
    taps.iter()
        .fold(RangeSelection::Empty, |selection, day| {
            selection.select_day(*day)
        })
}

fn active_trip(store: &Store) -> Result<Trip, Box<dyn Error>> {
    let Some(id) = store.load()? else {
        return Err("Nenhuma viagem ativa. Crie uma com `roteiro new`.".into());
    };
    store
        .get(&id)?
        .ok_or_else(|| format!("Viagem ativa não encontrada: {id}").into())
}
