/// One built-in formula function, with the metadata shown by the
/// suggestion surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FunctionDef {
    pub name: &'static str,
    pub description: &'static str,
    pub syntax: &'static str,
    pub examples: &'static [&'static str],
}

/// The fixed built-in function set.
pub const BUILTIN_FUNCTIONS: &[FunctionDef] = &[
    FunctionDef {
        name: "MIN",
        description: "Returns the minimum of two or more values",
        syntax: "MIN(a, b, ...)",
        examples: &["MIN(10, 5)", "MIN($Level, 100)"],
    },
    FunctionDef {
        name: "MAX",
        description: "Returns the maximum of two or more values",
        syntax: "MAX(a, b, ...)",
        examples: &["MAX(0, $Damage)", "MAX($Strength, $Dexterity)"],
    },
    FunctionDef {
        name: "FLOOR",
        description: "Rounds down to the nearest integer",
        syntax: "FLOOR(value)",
        examples: &["FLOOR(10.7)", "FLOOR($Damage / 2)"],
    },
    FunctionDef {
        name: "CEIL",
        description: "Rounds up to the nearest integer",
        syntax: "CEIL(value)",
        examples: &["CEIL(10.3)", "CEIL($Health / 10)"],
    },
    FunctionDef {
        name: "ROUND",
        description: "Rounds to the nearest integer",
        syntax: "ROUND(value)",
        examples: &["ROUND(10.5)", "ROUND($Damage * 1.5)"],
    },
    FunctionDef {
        name: "ABS",
        description: "Returns the absolute value",
        syntax: "ABS(value)",
        examples: &["ABS(-10)", "ABS($Damage - $Armor)"],
    },
    FunctionDef {
        name: "SQRT",
        description: "Returns the square root",
        syntax: "SQRT(value)",
        examples: &["SQRT(16)", "SQRT($Strength * 2)"],
    },
    FunctionDef {
        name: "POW",
        description: "Raises a number to a power",
        syntax: "POW(base, exponent)",
        examples: &["POW(2, 3)", "POW($Level, 1.5)"],
    },
    FunctionDef {
        name: "CLAMP",
        description: "Clamps a value between min and max",
        syntax: "CLAMP(value, min, max)",
        examples: &["CLAMP($Damage, 0, 100)", "CLAMP($Level, 1, 50)"],
    },
    FunctionDef {
        name: "LERP",
        description: "Linear interpolation between two values",
        syntax: "LERP(a, b, t)",
        examples: &["LERP(0, 100, 0.5)", "LERP($MinDamage, $MaxDamage, 0.5)"],
    },
];

/// Look up a built-in by exact name.
pub fn builtin(name: &str) -> Option<&'static FunctionDef> {
    BUILTIN_FUNCTIONS.iter().find(|f| f.name == name)
}

pub fn is_builtin(name: &str) -> bool {
    builtin(name).is_some()
}
