use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A blog post entry from portfolio.toml.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    pub slug: String,
    pub title: String,
    #[serde(deserialize_with = "deserialize_date")]
    pub date: NaiveDate,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub cover_image: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Post {
    /// Human-readable date for listings, e.g. "May 14, 2025".
    pub fn display_date(&self) -> String {
        self.date.format("%B %-d, %Y").to_string()
    }
}

/// Accept both `date = "2025-05-14"` and the bare TOML date
/// `date = 2025-05-14` (toml surfaces the latter as a datetime map).
fn deserialize_date<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: serde::Deserializer<'de>,
{
    struct DateVisitor;

    impl<'de> serde::de::Visitor<'de> for DateVisitor {
        type Value = NaiveDate;

        fn expecting(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
            f.write_str("a date in YYYY-MM-DD form")
        }

        fn visit_str<E>(self, v: &str) -> Result<NaiveDate, E>
        where
            E: serde::de::Error,
        {
            NaiveDate::parse_from_str(v, "%Y-%m-%d").map_err(E::custom)
        }

        fn visit_map<M>(self, map: M) -> Result<NaiveDate, M::Error>
        where
            M: serde::de::MapAccess<'de>,
        {
            let dt = toml::value::Datetime::deserialize(
                serde::de::value::MapAccessDeserializer::new(map),
            )?;
            let date = dt
                .date
                .ok_or_else(|| serde::de::Error::custom("expected a date, got a time"))?;
            NaiveDate::from_ymd_opt(date.year as i32, date.month as u32, date.day as u32)
                .ok_or_else(|| serde::de::Error::custom("date out of range"))
        }
    }

    deserializer.deserialize_any(DateVisitor)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_date() {
        let post = Post {
            slug: "hello".into(),
            title: "Hello".into(),
            date: NaiveDate::from_ymd_opt(2025, 5, 14).unwrap(),
            summary: String::new(),
            cover_image: String::new(),
            tags: vec![],
        };
        assert_eq!(post.display_date(), "May 14, 2025");
    }

    #[test]
    fn test_parse_quoted_date() {
        let post: Post = toml::from_str(
            r#"slug = "hello"
title = "Hello"
date = "2025-05-14"
"#,
        )
        .unwrap();
        assert_eq!(post.date, NaiveDate::from_ymd_opt(2025, 5, 14).unwrap());
    }

    #[test]
    fn test_parse_bare_toml_date() {
        let post: Post = toml::from_str(
            r#"slug = "hello"
title = "Hello"
date = 2025-05-14
"#,
        )
        .unwrap();
        assert_eq!(post.date, NaiveDate::from_ymd_opt(2025, 5, 14).unwrap());
    }
}
