//! Serialized shapes a host may depend on.

use same_game::core::{Level, LevelConfig, LevelSnapshot};
use same_game::types::{Cell, Element, ElementKind, LevelState};
use serde_json::json;

const A: Cell = Some(Element::new(ElementKind(0)));
const B: Cell = Some(Element::new(ElementKind(1)));

#[test]
fn snapshot_json_shape_is_stable() {
    let mut level = Level::from_layout(LevelConfig::new(3, 1, 2, 9), vec![A, A, B]).unwrap();
    level.select_index(0);

    let value = serde_json::to_value(level.snapshot()).unwrap();
    assert_eq!(
        value,
        json!({
            "width": 3,
            "height": 1,
            "cells": [null, null, 1],
            "episode_id": 0,
            "seed": 9,
            "score": 0,
            "moves": 1,
            "remaining": 1,
            "state": "NoMoreMovesPossible",
        })
    );
}

#[test]
fn snapshot_json_round_trips() {
    let level = Level::new(LevelConfig::new(4, 3, 3, 77)).unwrap();
    let snap = level.snapshot();
    let text = serde_json::to_string(&snap).unwrap();
    let back: LevelSnapshot = serde_json::from_str(&text).unwrap();
    assert_eq!(back, snap);
    assert_eq!(back.state, level.level_state());
}

#[test]
fn config_json_fills_defaults() {
    let config: LevelConfig = serde_json::from_value(json!({ "width": 7, "seed": 3 })).unwrap();
    assert_eq!(config.width, 7);
    assert_eq!(config.seed, 3);
    assert_eq!(config.height, LevelConfig::default().height);
    assert!(config.validate().is_ok());
}

#[test]
fn level_state_serializes_by_variant_name() {
    assert_eq!(
        serde_json::to_value(LevelState::FurtherMovesPossible).unwrap(),
        json!("FurtherMovesPossible")
    );
}
