// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Analytics configuration: volume-adjustment keyword lists and the
//! muscle-group catalog used when an exercise carries no primary group

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Main analytics configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyticsConfig {
    pub volume: VolumeRules,
    pub muscle_groups: MuscleGroupRules,
}

/// Keyword lists driving the per-limb volume doubling rule
///
/// Volume is doubled when the equipment is a per-limb load (dumbbell or
/// kettlebell) or the exercise is a single-limb movement. The lists are
/// matched case-insensitively as substrings against the equipment label and
/// both exercise names.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VolumeRules {
    pub dumbbell_keywords: Vec<String>,
    pub kettlebell_keywords: Vec<String>,
    pub unilateral_keywords: Vec<String>,
}

/// Muscle-group resolution for exercises without a catalog group
///
/// `name_map` maps an exact exercise name to its group; `keyword_rules` are
/// tried in order as substring matches; `fallback_group` catches the rest.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MuscleGroupRules {
    pub name_map: HashMap<String, String>,
    pub keyword_rules: Vec<KeywordRule>,
    pub fallback_group: String,
}

/// One substring-to-group rule; rule order is significant
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeywordRule {
    pub keyword: String,
    pub group: String,
}

impl AnalyticsConfig {
    /// Load configuration from file or use embedded defaults
    pub fn load(path: Option<String>) -> Result<Self> {
        if let Some(config_path) = path {
            return Self::load_from_file(&config_path);
        }

        if Path::new("analytics_config.toml").exists() {
            return Self::load_from_file("analytics_config.toml");
        }

        Ok(Self::default())
    }

    /// Load configuration from a specific file
    pub fn load_from_file(path: &str) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read analytics config file: {}", path))?;

        let config: AnalyticsConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse analytics config file: {}", path))?;

        Ok(config)
    }

    /// Resolve the muscle group for an exercise
    ///
    /// A non-empty catalog group wins; otherwise the exact-name map, then the
    /// ordered keyword rules against both names, then the fallback group.
    pub fn resolve_muscle_group(
        &self,
        exercise_name: &str,
        english_name: Option<&str>,
        catalog_group: &str,
    ) -> String {
        if !catalog_group.trim().is_empty() {
            return catalog_group.to_string();
        }

        if let Some(group) = self.muscle_groups.name_map.get(exercise_name) {
            return group.clone();
        }

        let english = english_name.unwrap_or("");
        for rule in &self.muscle_groups.keyword_rules {
            if exercise_name.contains(rule.keyword.as_str())
                || english.to_lowercase().contains(&rule.keyword.to_lowercase())
            {
                return rule.group.clone();
            }
        }

        self.muscle_groups.fallback_group.clone()
    }
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            volume: VolumeRules::default(),
            muscle_groups: MuscleGroupRules::default(),
        }
    }
}

impl Default for VolumeRules {
    fn default() -> Self {
        Self {
            dumbbell_keywords: to_strings(&["덤벨", "dumbbell", "db"]),
            kettlebell_keywords: to_strings(&["케틀벨", "kettlebell", "kb"]),
            unilateral_keywords: to_strings(&[
                // Korean
                "싱글", "원암", "원레그", "얼터네이트", "런지", "불가리안", "피스톨",
                "스텝", "한쪽", "한손", "한발", "한다리", "한팔", "교대", "스플릿",
                // English
                "single", "one arm", "one-arm", "one leg", "one-leg", "unilateral",
                "alternate", "alternating", "lunge", "bulgarian", "pistol", "step-up",
                "split", "staggered", "b-stance", "single-arm", "single-leg",
            ]),
        }
    }
}

impl Default for MuscleGroupRules {
    fn default() -> Self {
        let mut name_map = HashMap::new();

        // 가슴 (chest)
        for name in ["벤치프레스", "인클라인 벤치프레스", "덤벨 플라이", "푸시업", "케이블 크로스오버", "딥스"] {
            name_map.insert(name.to_string(), "가슴".to_string());
        }
        // 등 (back)
        for name in ["데드리프트", "랫 풀다운", "바벨 로우", "시티드 로우", "풀업", "친업"] {
            name_map.insert(name.to_string(), "등".to_string());
        }
        // 어깨 (shoulders)
        for name in ["숄더 프레스", "사이드 레터럴 레이즈", "프론트 레이즈", "리어 델트 플라이", "업라이트 로우"] {
            name_map.insert(name.to_string(), "어깨".to_string());
        }
        // 팔 (arms)
        for name in ["바벨 컬", "덤벨 컬", "해머 컬", "트라이셉스 익스텐션", "케이블 푸시다운", "프리처 컬"] {
            name_map.insert(name.to_string(), "팔".to_string());
        }
        // 하체 (legs)
        for name in ["스쿼트", "레그 프레스", "런지", "레그 컬", "레그 익스텐션", "카프 레이즈"] {
            name_map.insert(name.to_string(), "하체".to_string());
        }
        // 코어 (core)
        for name in ["플랭크", "크런치", "레그 레이즈", "러시안 트위스트", "사이드 플랭크"] {
            name_map.insert(name.to_string(), "코어".to_string());
        }

        let keyword_rules = vec![
            rule("프레스", "가슴"),
            rule("플라이", "가슴"),
            rule("로우", "등"),
            rule("풀", "등"),
            rule("레이즈", "어깨"),
            rule("숄더", "어깨"),
            rule("컬", "팔"),
            rule("익스텐션", "팔"),
            rule("스쿼트", "하체"),
            rule("레그", "하체"),
            rule("플랭크", "코어"),
            rule("크런치", "코어"),
        ];

        Self {
            name_map,
            keyword_rules,
            fallback_group: "기타".to_string(),
        }
    }
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn rule(keyword: &str, group: &str) -> KeywordRule {
    KeywordRule {
        keyword: keyword.to_string(),
        group: group.to_string(),
    }
}
