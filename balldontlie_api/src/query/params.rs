//! Query string encoding: absent values are dropped, lists become repeated `key[]` pairs.

use std::fmt;

use chrono::NaiveDate;
use url::{form_urlencoded, Url};

use super::common::Query;

/// A single query value.
#[derive(Clone, Debug, PartialEq)]
pub enum Scalar {
    Str(String),
    Int(i64),
    UInt(u64),
    Float(f64),
    Bool(bool),
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Str(s) => f.write_str(s),
            Scalar::Int(i) => write!(f, "{}", i),
            Scalar::UInt(u) => write!(f, "{}", u),
            Scalar::Float(x) => write!(f, "{}", x),
            Scalar::Bool(b) => write!(f, "{}", b),
        }
    }
}

impl From<&str> for Scalar {
    fn from(value: &str) -> Self {
        Scalar::Str(value.to_string())
    }
}

impl From<String> for Scalar {
    fn from(value: String) -> Self {
        Scalar::Str(value)
    }
}

impl From<&String> for Scalar {
    fn from(value: &String) -> Self {
        Scalar::Str(value.clone())
    }
}

impl From<i64> for Scalar {
    fn from(value: i64) -> Self {
        Scalar::Int(value)
    }
}

impl From<i32> for Scalar {
    fn from(value: i32) -> Self {
        Scalar::Int(value.into())
    }
}

impl From<u32> for Scalar {
    fn from(value: u32) -> Self {
        Scalar::Int(value.into())
    }
}

impl From<u64> for Scalar {
    fn from(value: u64) -> Self {
        Scalar::UInt(value)
    }
}

impl From<f64> for Scalar {
    fn from(value: f64) -> Self {
        Scalar::Float(value)
    }
}

impl From<bool> for Scalar {
    fn from(value: bool) -> Self {
        Scalar::Bool(value)
    }
}

impl From<NaiveDate> for Scalar {
    fn from(value: NaiveDate) -> Self {
        Scalar::Str(value.format("%Y-%m-%d").to_string())
    }
}

/// A parameter value: one scalar or an ordered list of scalars.
#[derive(Clone, Debug, PartialEq)]
pub enum ParamValue {
    Scalar(Scalar),
    List(Vec<Scalar>),
}

/// Ordered set of query parameters.
///
/// Entries keep insertion order. `None` values are remembered but never
/// serialized, and list values expand to one `key[]=value` pair per element.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct QueryParams {
    entries: Vec<(String, Option<ParamValue>)>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a scalar parameter.
    pub fn push(&mut self, key: &str, value: impl Into<Scalar>) -> &mut Self {
        self.entries
            .push((key.to_string(), Some(ParamValue::Scalar(value.into()))));
        self
    }

    /// Appends a parameter that may be absent.
    pub fn push_opt<T: Into<Scalar>>(&mut self, key: &str, value: Option<T>) -> &mut Self {
        self.entries.push((
            key.to_string(),
            value.map(|v| ParamValue::Scalar(v.into())),
        ));
        self
    }

    /// Appends a list parameter, encoded as repeated `key[]` pairs.
    pub fn push_list<I>(&mut self, key: &str, values: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: Into<Scalar>,
    {
        let list = values.into_iter().map(Into::into).collect();
        self.entries
            .push((key.to_string(), Some(ParamValue::List(list))));
        self
    }

    /// Appends a raw value.
    pub fn push_value(&mut self, key: &str, value: Option<ParamValue>) -> &mut Self {
        self.entries.push((key.to_string(), value));
        self
    }

    /// Whether encoding would produce no pairs.
    pub fn is_empty(&self) -> bool {
        self.pairs().is_empty()
    }

    /// The decoded `(key, value)` pairs that will be sent, in order.
    pub fn pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        for (key, value) in self.entries.iter() {
            match value {
                None => {}
                Some(ParamValue::Scalar(scalar)) => pairs.push((key.clone(), scalar.to_string())),
                Some(ParamValue::List(list)) => {
                    let list_key = format!("{}[]", key);
                    for item in list.iter() {
                        pairs.push((list_key.clone(), item.to_string()));
                    }
                }
            }
        }
        pairs
    }

    /// Percent-encodes the pairs into a query string without the leading `?`.
    pub fn encode(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        for (key, value) in self.pairs().iter() {
            serializer.append_pair(key, value);
        }
        serializer.finish()
    }

    /// Appends the pairs to the URL's query, returning the modified URL.
    pub fn add_to_url(&self, url: &Url) -> Url {
        let mut url = url.clone();
        let pairs = self.pairs();
        if !pairs.is_empty() {
            let mut query = url.query_pairs_mut();
            for (key, value) in pairs.iter() {
                query.append_pair(key, value);
            }
        }
        url
    }
}

impl Query for QueryParams {
    fn to_params(&self) -> QueryParams {
        self.clone()
    }
}
