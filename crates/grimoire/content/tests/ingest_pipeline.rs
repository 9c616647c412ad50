//! End-to-end ingestion tests against an in-memory row store.

use grimoire_content::ingest::join::columns;
use grimoire_content::{
    IngestError, JoinError, MemoryRowStore, ParseError, SeTextDecoder, build_catalog,
};
use grimoire_core::{
    ActionId, Aspect, Aspects, CastTime, Catalog, CatalogConfig, CatalogError, Category, Cell,
    FilterKey, Grimoire, IconId, RecastTime, Row, RowError, SheetNames, SpellEffect, SpellRank,
    SpellType, Targets, UnknownTiming,
};

#[derive(Clone, Copy)]
struct Spell {
    primary: u32,
    number: u32,
    action: u32,
    name: &'static str,
    stats: &'static str,
    enemy: bool,
    self_or_ally: bool,
    effects: &'static [usize],
}

const SPELLS: &[Spell] = &[
    Spell {
        primary: 1,
        number: 1,
        action: 11385,
        name: "Water Cannon",
        stats: "Magical Water ★",
        enemy: true,
        self_or_ally: false,
        effects: &[],
    },
    Spell {
        primary: 2,
        number: 5,
        action: 11398,
        name: "Drill Cannons",
        stats: "Physical Piercing ★",
        enemy: true,
        self_or_ally: false,
        effects: &[3],
    },
    Spell {
        primary: 3,
        number: 2,
        action: 11402,
        name: "Flame Thrower",
        stats: "Magical Fire ★★",
        enemy: false,
        self_or_ally: false,
        effects: &[],
    },
    Spell {
        primary: 4,
        number: 55,
        action: 11417,
        name: "Fire Angon",
        stats: "Physical Piercing/Fire ★★★",
        enemy: true,
        self_or_ally: true,
        effects: &[0, 5],
    },
];

fn insert(store: &mut MemoryRowStore, sheets: &SheetNames, spell: &Spell) {
    store.insert(
        sheets.spells.as_str(),
        spell.primary,
        Row::new()
            .with(columns::ACTION, Cell::Int(spell.action.into()))
            .with(columns::NAME, Cell::Str(spell.name.into()))
            .with(columns::ICON, Cell::Int(3000 + i64::from(spell.primary)))
            .with(columns::CAST, Cell::Int(20))
            .with(columns::RECAST, Cell::Int(25))
            .with(columns::UNLOCK_LINK, Cell::Int(i64::from(spell.action) + 1000)),
    );

    let mut transient = Row::new()
        .with(columns::NUMBER, Cell::Int(spell.number.into()))
        .with(columns::STATS, Cell::Str(spell.stats.into()))
        .with(columns::FLAVOR, Cell::Str(format!("{} flavor", spell.name)))
        .with(columns::TARGETS_ENEMY, Cell::Bool(spell.enemy))
        .with(columns::TARGETS_SELF_OR_ALLY, Cell::Bool(spell.self_or_ally));
    for (position, column) in columns::EFFECTS.iter().enumerate() {
        transient.insert(*column, Cell::Bool(spell.effects.contains(&position)));
    }
    store.insert(sheets.transients.as_str(), spell.primary, transient);

    store.insert(
        sheets.descriptions.as_str(),
        spell.action,
        Row::new().with(
            columns::DESCRIPTION,
            Cell::Str(format!("{} description", spell.name)),
        ),
    );
}

fn store_from<'a>(spells: impl IntoIterator<Item = &'a Spell>) -> MemoryRowStore {
    let sheets = SheetNames::default();
    let mut store = MemoryRowStore::new().with(sheets.spells.as_str(), 0, Row::new());
    for spell in spells {
        insert(&mut store, &sheets, spell);
    }
    store
}

fn build(store: &MemoryRowStore) -> Result<Catalog, IngestError> {
    build_catalog(store, &SeTextDecoder::new(), &CatalogConfig::default())
}

#[test]
fn assembles_normalized_records() {
    let catalog = build(&store_from(SPELLS)).unwrap();
    assert_eq!(catalog.len(), 4);

    let angon = catalog.get(ActionId(11417)).unwrap();
    assert_eq!(angon.display_number, 55);
    assert_eq!(angon.icon, IconId(3004));
    assert_eq!(angon.name, "Fire Angon");
    assert_eq!(angon.description, "Fire Angon description");
    assert_eq!(angon.flavor_text, "Fire Angon flavor");
    assert_eq!(angon.spell_type, SpellType::Physical);
    assert_eq!(angon.aspects, Aspects::PIERCING | Aspects::FIRE);
    assert_eq!(angon.rank, SpellRank::Three);
    assert_eq!(angon.target, Targets::ENEMY | Targets::SELF_OR_ALLY);
    assert_eq!(
        angon.effects.as_slice(),
        &[SpellEffect::Slow, SpellEffect::Stun]
    );
    assert_eq!(angon.cast_time, CastTime::S2);
    assert_eq!(angon.recast_time, RecastTime::S2_5);
    assert_eq!(angon.unlock_key, 12417);
    assert!(!angon.is_unlocked);

    let flame = catalog.get(ActionId(11402)).unwrap();
    assert_eq!(flame.target, Targets::UNTARGETABLE);
}

#[test]
fn catalog_is_sorted_by_display_number() {
    let catalog = build(&store_from(SPELLS)).unwrap();
    let numbers: Vec<u32> = catalog.iter().map(|r| r.display_number).collect();
    assert_eq!(numbers, vec![1, 2, 5, 55]);
}

#[test]
fn ingestion_is_deterministic() {
    let forward = build(&store_from(SPELLS)).unwrap();
    let reversed = build(&store_from(SPELLS.iter().rev())).unwrap();

    assert_eq!(forward.records(), reversed.records());
    assert_eq!(forward.fingerprint(), reversed.fingerprint());
}

#[test]
fn missing_transient_row_aborts() {
    let sheets = SheetNames::default();
    let mut store = store_from(SPELLS);
    store.remove(&sheets.transients, 3).unwrap();

    assert_eq!(
        build(&store).unwrap_err(),
        IngestError::Join(JoinError::MissingRow {
            sheet: sheets.transients.clone(),
            id: 3,
            primary: 3,
        })
    );
}

#[test]
fn missing_description_row_aborts() {
    let sheets = SheetNames::default();
    let mut store = store_from(SPELLS);
    store.remove(&sheets.descriptions, 11398).unwrap();

    assert_eq!(
        build(&store).unwrap_err(),
        IngestError::Join(JoinError::MissingRow {
            sheet: sheets.descriptions.clone(),
            id: 11398,
            primary: 2,
        })
    );
}

#[test]
fn zero_action_link_aborts() {
    let sheets = SheetNames::default();
    let store = store_from(SPELLS).with(
        sheets.spells.as_str(),
        9,
        Row::new().with(columns::ACTION, Cell::Int(0)),
    );
    let store = store.with(sheets.transients.as_str(), 9, Row::new());

    assert_eq!(
        build(&store).unwrap_err(),
        IngestError::Join(JoinError::NullLink { primary: 9 })
    );
}

#[test]
fn bad_stats_text_aborts_with_primary_id() {
    let bad = Spell {
        stats: "Magical Steam ★",
        ..SPELLS[0]
    };
    let store = store_from([&bad]);

    assert_eq!(
        build(&store).unwrap_err(),
        IngestError::Parse {
            primary: 1,
            source: ParseError::UnknownAspect("Steam".into()),
        }
    );
}

#[test]
fn unknown_timing_aborts() {
    let sheets = SheetNames::default();
    let mut store = store_from(SPELLS);
    let base = Row::new()
        .with(columns::ACTION, Cell::Int(11385))
        .with(columns::NAME, Cell::Str("Water Cannon".into()))
        .with(columns::ICON, Cell::Int(3001))
        .with(columns::CAST, Cell::Int(25))
        .with(columns::RECAST, Cell::Int(25))
        .with(columns::UNLOCK_LINK, Cell::Int(12385));
    store.insert(sheets.spells.as_str(), 1, base);

    assert_eq!(
        build(&store).unwrap_err(),
        IngestError::Parse {
            primary: 1,
            source: ParseError::Timing(UnknownTiming {
                category: Category::Cast,
                raw: 25,
            }),
        }
    );
}

#[test]
fn missing_column_aborts() {
    let sheets = SheetNames::default();
    let mut store = store_from(SPELLS);
    let mut transient = Row::new()
        .with(columns::NUMBER, Cell::Int(1))
        .with(columns::STATS, Cell::Str("Magical Water ★".into()));
    transient.insert(columns::FLAVOR, Cell::Str(String::new()));
    store.insert(sheets.transients.as_str(), 1, transient);

    let error = build(&store).unwrap_err();
    assert!(matches!(
        error,
        IngestError::Row {
            id: 1,
            source: RowError::MissingColumn { .. },
            ..
        }
    ));
}

#[test]
fn duplicate_actions_are_rejected() {
    let twin = Spell {
        primary: 7,
        number: 7,
        ..SPELLS[0]
    };
    let store = store_from(SPELLS.iter().chain([&twin]));

    assert_eq!(
        build(&store).unwrap_err(),
        IngestError::Catalog(CatalogError::DuplicateAction(ActionId(11385)))
    );
}

#[test]
fn markup_is_stripped_from_text_cells() {
    let sheets = SheetNames::default();
    let mut store = store_from(SPELLS);
    let mut transient = Row::new()
        .with(columns::NUMBER, Cell::Int(1))
        .with(
            columns::STATS,
            Cell::Str("Magical\u{2}\u{10}\u{1}\u{3}Water\u{2}\u{10}\u{1}\u{3}★".into()),
        )
        .with(
            columns::FLAVOR,
            Cell::Str("A blast\u{2}\u{10}\u{1}\u{3}of water.".into()),
        )
        .with(columns::TARGETS_ENEMY, Cell::Bool(true))
        .with(columns::TARGETS_SELF_OR_ALLY, Cell::Bool(false));
    for column in columns::EFFECTS {
        transient.insert(column, Cell::Bool(false));
    }
    store.insert(sheets.transients.as_str(), 1, transient);

    let catalog = build(&store).unwrap();
    let water = catalog.get(ActionId(11385)).unwrap();
    assert_eq!(water.aspects, Aspects::WATER);
    assert_eq!(water.flavor_text, "A blastof water.");
}

#[test]
fn published_catalog_drives_the_filter() {
    let catalog = build(&store_from(SPELLS)).unwrap();
    let mut grimoire = Grimoire::new(catalog, &CatalogConfig::default());
    assert_eq!(grimoire.visible_len(), 4);

    grimoire.toggle(FilterKey::Aspect(Aspect::Fire));
    let names: Vec<&str> = grimoire.visible().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["Flame Thrower", "Fire Angon"]);

    grimoire.toggle(FilterKey::Type(SpellType::Physical));
    let names: Vec<&str> = grimoire.visible().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["Fire Angon"]);

    grimoire.clear_all();
    grimoire.toggle(FilterKey::Effect(SpellEffect::Sleep));
    assert_eq!(grimoire.visible_len(), 0);
}
