//! The fetch, transform, cache and write run
//!
//! One synchronous pass: download the game tables, build the operator list,
//! cache every referenced icon, then write the JSON files. The configured
//! [`SkillLayout`] decides which files are produced.

use crate::asset::AssetCategory;
use crate::config::{Config, SkillLayout};
use crate::error::DataError;
use crate::facility::{self, Facility};
use crate::image_cache::{CacheError, CacheStats, ImageCache};
use crate::operator::{self, CharacterTable, Operator};
use crate::output::{self, WriteError};
use crate::skill::{self, BuildingData, SkillBook, SkillRef, SkillTable};
use crate::source::{FetchError, GameTable, HttpSource, Server};
use crate::terms::{self, GameConstants};
use std::collections::BTreeSet;
use std::path::PathBuf;
use thiserror::Error;
use tracing::info;

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Data(#[from] DataError),

    #[error(transparent)]
    Cache(#[from] CacheError),

    #[error(transparent)]
    Write(#[from] WriteError),
}

/// What a run produced
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Summary {
    pub operators: usize,
    pub skills: usize,
    pub facilities: usize,
    pub images: CacheStats,
    pub written: Vec<PathBuf>,
}

/// Run the whole pipeline against `source`
pub fn run<S: HttpSource>(config: &Config, source: &S) -> Result<Summary, PipelineError> {
    let cache = ImageCache::new(source, &config.static_dir);

    info!("Fetching character and building tables");
    let characters: CharacterTable = source.get_json(&GameTable::Characters.url(Server::Cn))?;
    let cn_building: BuildingData = source.get_json(&GameTable::Building.url(Server::Cn))?;
    let en_building: BuildingData = source.get_json(&GameTable::Building.url(Server::En))?;
    let book = SkillBook::new(&en_building.buffs, &cn_building.buffs);

    let mut summary = match config.layout {
        SkillLayout::Inline => run_inline(config, &cache, &characters, &cn_building, &book)?,
        SkillLayout::Table => {
            run_table(config, source, &cache, &characters, &cn_building, &en_building, &book)?
        }
    };

    cache_item_icons(&cache, &config.item_whitelist)?;

    summary.images = cache.stats();
    info!(
        operators = summary.operators,
        skills = summary.skills,
        facilities = summary.facilities,
        saved = summary.images.saved,
        cached = summary.images.cached,
        skipped = summary.images.skipped,
        "Done ({} layout)",
        config.layout
    );

    Ok(summary)
}

fn run_inline<S: HttpSource>(
    config: &Config,
    cache: &ImageCache<'_, S>,
    characters: &CharacterTable,
    cn_building: &BuildingData,
    book: &SkillBook<'_>,
) -> Result<Summary, PipelineError> {
    let operators = operator::build_operators(
        characters,
        &cn_building.chars,
        &config.name_overrides,
        |chains| skill::flatten_inline(chains, book),
    )?;
    info!("Built {} operators", operators.len());

    info!("Caching operator and skill icons");
    for op in &operators {
        for skill in &op.skills {
            cache.ensure(AssetCategory::Skill, &skill.info.icon_id)?;
        }
        cache.ensure(AssetCategory::Character, &op.char_id)?;
    }

    let chars_path = config.data_path(output::CHARS_FILE);
    output::write_json(&chars_path, &operators)?;

    let skills = operators.iter().map(|op| op.skills.len()).sum();
    Ok(Summary {
        operators: operators.len(),
        skills,
        written: vec![chars_path],
        ..Summary::default()
    })
}

fn run_table<S: HttpSource>(
    config: &Config,
    source: &S,
    cache: &ImageCache<'_, S>,
    characters: &CharacterTable,
    cn_building: &BuildingData,
    en_building: &BuildingData,
    book: &SkillBook<'_>,
) -> Result<Summary, PipelineError> {
    let mut skill_table = SkillTable::new();
    let operators = operator::build_operators(
        characters,
        &cn_building.chars,
        &config.name_overrides,
        |chains| skill::flatten_referenced(chains, book, &mut skill_table),
    )?;
    info!(
        "Built {} operators sharing {} skills",
        operators.len(),
        skill_table.len()
    );

    info!("Caching operator, skill and elite icons");
    cache_operator_icons(cache, &operators, &skill_table)?;

    let facilities = facility::extract_facilities(&en_building.rooms)?;
    info!("Caching {} facility icons", facilities.len());
    cache_facility_icons(cache, &facilities)?;

    info!("Fetching rich text styles and terms");
    let cn_constants: GameConstants = source.get_json(&GameTable::Constants.url(Server::Cn))?;
    let en_constants: GameConstants = source.get_json(&GameTable::Constants.url(Server::En))?;
    let styles = terms::merge_locales(cn_constants.rich_text_styles, en_constants.rich_text_styles);
    let term_dict = terms::merge_locales(
        cn_constants.term_description_dict,
        en_constants.term_description_dict,
    );
    let text_colors = terms::text_colors(&styles);
    let term_descriptions = terms::term_descriptions(&term_dict);

    let written = vec![
        config.data_path(output::CHARS_FILE),
        config.data_path(output::SKILLS_FILE),
        config.data_path(output::FACILITIES_FILE),
        config.data_path(output::TEXT_COLORS_FILE),
        config.data_path(output::TERMS_FILE),
    ];
    output::write_json(&written[0], &operators)?;
    output::write_json(&written[1], &skill_table)?;
    output::write_json(&written[2], &facilities)?;
    output::write_json(&written[3], &text_colors)?;
    output::write_json(&written[4], &term_descriptions)?;

    Ok(Summary {
        operators: operators.len(),
        skills: skill_table.len(),
        facilities: facilities.len(),
        written,
        ..Summary::default()
    })
}

fn cache_operator_icons<S: HttpSource>(
    cache: &ImageCache<'_, S>,
    operators: &[Operator<SkillRef>],
    skill_table: &SkillTable,
) -> Result<(), PipelineError> {
    let mut elites = BTreeSet::new();

    for op in operators {
        for skill in &op.skills {
            elites.insert(skill.elite);
            // Every referenced id was added to the table while flattening
            if let Some(info) = skill_table.get(&skill.skill_id) {
                cache.ensure(AssetCategory::Skill, &info.icon_id)?;
            }
        }
        cache.ensure(AssetCategory::Character, &op.char_id)?;
    }

    for elite in elites {
        cache.ensure(AssetCategory::Elite, &elite.to_string())?;
    }

    Ok(())
}

fn cache_facility_icons<S: HttpSource>(
    cache: &ImageCache<'_, S>,
    facilities: &[Facility],
) -> Result<(), PipelineError> {
    for facility in facilities {
        cache.ensure(AssetCategory::Facility, &facility.id)?;
    }
    Ok(())
}

fn cache_item_icons<S: HttpSource>(
    cache: &ImageCache<'_, S>,
    item_ids: &[String],
) -> Result<(), PipelineError> {
    if !item_ids.is_empty() {
        info!("Caching {} item icons", item_ids.len());
    }
    for id in item_ids {
        cache.ensure(AssetCategory::Item, id)?;
    }
    Ok(())
}
