// src/main.rs
//
// Walks through every validation path once and reports what happened.
// Set RUST_LOG=debug to also see event bus traffic.

use std::fmt::Display;
use std::sync::Arc;

use anyhow::{bail, Context};

use formacao::events::{EventBus, UsersEnrolled};
use formacao::services::{CatalogConfig, CatalogService, CreateProgramRequest, EnrollRequest};
use formacao::{ContentItem, Level, Program, User};

/// A call that must be refused; accepting it means the rules are broken
fn expect_rejection<T, E: Display>(caso: &str, result: Result<T, E>) -> anyhow::Result<()> {
    match result {
        Ok(_) => bail!("{} was accepted", caso),
        Err(e) => {
            log::info!("{} rejected: {}", caso, e);
            Ok(())
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // 1. CONSTRUCTION RULES
    expect_rejection("Blank user name", User::new(""))?;
    expect_rejection(
        "Blank program name",
        Program::new(
            "  ",
            Level::Basic,
            vec![ContentItem::new("Introdução a linguagem Kotlin")?],
        ),
    )?;
    expect_rejection("Blank content name", ContentItem::new("     "))?;
    expect_rejection("Zero duration", ContentItem::with_duration("Kotlin", 0))?;

    let kotlin = ContentItem::new("Kotlin")?;
    log::info!(
        "Default duration of '{}' should be 60 min and is {} min",
        kotlin.nome(),
        kotlin.duracao()
    );

    // 2. CATALOG
    let event_bus = Arc::new(EventBus::new());
    event_bus.subscribe::<UsersEnrolled, _>(|event| {
        log::debug!("{} joined {}", event.usuarios.join(", "), event.program_id);
    });
    let catalog = CatalogService::new(Arc::clone(&event_bus), CatalogConfig::default());

    let program_id = catalog.register_program(CreateProgramRequest {
        nome: "Desenvolvimento Android com Kotlin e Jetpack Compose".to_string(),
        nivel: Level::Intermediate,
        conteudos: vec![
            ContentItem::new("Introdução a linguagem Kotlin")?,
            ContentItem::with_duration("Programação Orientada a Objetos", 240)?,
            ContentItem::with_duration("Apresentação do Android Studio e Jetpack compose", 120)?,
        ],
    })?;

    // 3. ENROLLMENT
    let hugo = User::new("Hugo Lacerda")?;
    let ana = User::new("Ana Maia")?;
    let emilia = User::new("Emilia Lins")?;

    catalog.enroll(EnrollRequest {
        program_id,
        usuarios: vec![hugo, ana.clone()],
    })?;
    expect_rejection(
        "Batch with an already enrolled user",
        catalog.enroll(EnrollRequest {
            program_id,
            usuarios: vec![ana, emilia.clone()],
        }),
    )?;
    catalog.enroll(EnrollRequest {
        program_id,
        usuarios: vec![emilia],
    })?;

    // 4. REPORT
    let program = catalog
        .get_program(program_id)?
        .context("registered program disappeared from the catalog")?;

    let mut inscritos: Vec<&str> = program.inscritos().iter().map(User::nome).collect();
    inscritos.sort_unstable();
    println!("Users enrolled in {}: {}", program, inscritos.join(", "));

    let conteudos: Vec<String> = program.conteudos().iter().map(ToString::to_string).collect();
    println!("Program contents: {}", conteudos.join(", "));

    Ok(())
}
