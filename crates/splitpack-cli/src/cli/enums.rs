use clap::ValueEnum;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// ECMAScript target version
///
/// Determines which JavaScript language features are available in the output.
/// Later versions enable more modern syntax and APIs but require newer runtimes.
#[derive(Copy, Clone, PartialEq, Eq, Debug, ValueEnum, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum EsTarget {
    /// ECMAScript 2015 (ES6)
    ///
    /// Maximum compatibility. Features: classes, arrow functions, promises, let/const.
    #[value(name = "es2015")]
    Es2015,

    /// ECMAScript 2016
    ///
    /// Adds: Array.prototype.includes, exponentiation operator (**)
    #[value(name = "es2016")]
    Es2016,

    /// ECMAScript 2017
    ///
    /// Adds: async/await, Object.entries/values, string padding
    #[value(name = "es2017")]
    Es2017,

    /// ECMAScript 2018
    ///
    /// Adds: async iteration, rest/spread properties, Promise.finally
    #[value(name = "es2018")]
    Es2018,

    /// ECMAScript 2019
    ///
    /// Adds: Array.prototype.flat/flatMap, Object.fromEntries, optional catch
    #[value(name = "es2019")]
    Es2019,

    /// ECMAScript 2020
    ///
    /// Adds: optional chaining (?.), nullish coalescing (??), BigInt, dynamic import
    #[value(name = "es2020")]
    Es2020,

    /// ECMAScript 2021
    ///
    /// Adds: String.prototype.replaceAll, Promise.any, logical assignment operators
    #[value(name = "es2021")]
    Es2021,

    /// ECMAScript 2022
    ///
    /// Adds: class fields, top-level await, Array.prototype.at, Object.hasOwn
    #[value(name = "es2022")]
    Es2022,

    /// Latest ECMAScript features
    ///
    /// Output may break in older environments.
    #[value(name = "esnext")]
    Esnext,
}
