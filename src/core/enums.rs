//! Symbolic names for the integer codes the document format uses.
//!
//! Every enum converts losslessly to its `i32` code and back, so an enum
//! value and its code can be used interchangeably for enum-backed fields.

use crate::util::Error;

macro_rules! code_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident = $code:literal => $label:literal ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[repr(i32)]
        $vis enum $name {
            $( $(#[$vmeta])* $variant = $code ),*
        }

        impl $name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [Self] = &[ $( Self::$variant ),* ];

            /// Integer code written to the document.
            #[inline]
            pub const fn code(self) -> i32 {
                self as i32
            }

            /// Symbolic name.
            pub const fn name(self) -> &'static str {
                match self {
                    $( Self::$variant => $label ),*
                }
            }

            pub fn from_code(code: i32) -> Option<Self> {
                match code {
                    $( $code => Some(Self::$variant), )*
                    _ => None,
                }
            }

            /// Look up by symbolic name (case-insensitive).
            pub fn from_name(name: &str) -> Option<Self> {
                Self::ALL
                    .iter()
                    .copied()
                    .find(|v| v.name().eq_ignore_ascii_case(name))
            }
        }

        impl From<$name> for i32 {
            #[inline]
            fn from(v: $name) -> i32 {
                v.code()
            }
        }

        impl From<$name> for i64 {
            #[inline]
            fn from(v: $name) -> i64 {
                v.code() as i64
            }
        }

        impl From<$name> for i128 {
            #[inline]
            fn from(v: $name) -> i128 {
                v.code() as i128
            }
        }

        impl TryFrom<i32> for $name {
            type Error = Error;

            fn try_from(code: i32) -> Result<Self, Error> {
                Self::from_code(code).ok_or_else(|| {
                    Error::invalid(stringify!($name), format!("unknown code {}", code))
                })
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.name())
            }
        }
    };
}

code_enum! {
    /// Numeric object identifiers.
    pub enum BlockId {
        Null = -1 => "NULL",
        Primitive = 0 => "PRIMITIVE",
        PineTree = 1000 => "PINE_TREE",
        Logo = 1002 => "LOGO",
        LogoIcon = 1003 => "LOGO_ICON",
        PalmTree = 1004 => "PALM_TREE",
        StreetLamp = 1005 => "STREET_LAMP",
        Flower = 1006 => "FLOWER",
        Fence = 1007 => "FENCE",
        Torch = 1008 => "TORCH",
        StringLights = 1009 => "STRING_LIGHTS",
        Hyacinth = 1010 => "HYACINTH",
        AnalogClock = 1012 => "ANALOG_CLOCK",
        Rose = 1014 => "ROSE",
        Tree = 1015 => "TREE",
        Cornstalk = 1016 => "CORNSTALK",
        Mesh = 1100 => "MESH",
        Cloud = 1101 => "CLOUD",
        Statue = 1102 => "STATUE",
        Spring = 2000 => "SPRING",
        Water = 2001 => "WATER",
        Spawn = 2002 => "SPAWN",
        Checkpoint = 2003 => "CHECKPOINT",
        Token = 2004 => "TOKEN",
        Ladder = 2005 => "LADDER",
        Ice = 2006 => "ICE",
        CompletionStar = 2007 => "COMPLETION_STAR",
        Magma = 2008 => "MAGMA",
        BoostPanel = 2009 => "BOOST_PANEL",
        SpeedPanel = 2010 => "SPEED_PANEL",
        Grates = 2011 => "GRATES",
        DisappearingBlock = 2012 => "DISAPPEARING_BLOCK",
        MissileLauncher = 2013 => "MISSILE_LAUNCHER",
        BreakableBlock = 2014 => "BREAKABLE_BLOCK",
        Cannon = 2015 => "CANNON",
        Portal = 2016 => "PORTAL",
        DialogueSign = 2019 => "DIALOGUE_SIGN",
        Web = 2025 => "WEB",
        NoteBlock = 2026 => "NOTE_BLOCK",
        LevelPainting = 2027 => "LEVEL_PAINTING",
        BopiSpawner = 3000 => "BOPI_SPAWNER",
        GloomlightSpawner = 3100 => "GLOOMLIGHT_SPAWNER",
        ItemGranter = 60000 => "ITEM_GRANTER",
        BleedingEye = 61366 => "BLEEDING_EYE",
    }
}

impl BlockId {
    /// Older name for [`BlockId::Magma`].
    pub const LAVA: Self = Self::Magma;
}

code_enum! {
    /// Primitive shapes. All primitives share one block id since 1.1.0.
    pub enum Shape {
        Cube = 0 => "CUBE",
        Ramp = 1 => "RAMP",
        Cylinder = 2 => "CYLINDER",
        HalfCylinder = 3 => "HALF_CYLINDER",
        QuarterCylinder = 4 => "QUARTER_CYLINDER",
        Sphere = 5 => "SPHERE",
        HalfSphere = 6 => "HALF_SPHERE",
        CornerRamp = 7 => "CORNER_RAMP",
        Cone = 8 => "CONE",
        Torus = 9 => "TORUS",
        ThinTorus = 10 => "THIN_TORUS",
        Tetrahedron = 11 => "TETRAHEDRON",
        Pyramid = 12 => "PYRAMID",
        PyramidCorner = 13 => "PYRAMID_CORNER",
        Octahedron = 14 => "OCTAHEDRON",
        RoundedRamp = 15 => "ROUNDED_RAMP",
        InvertedRoundedRamp = 16 => "INVERTED_ROUNDED_RAMP",
        HollowCylinder = 17 => "HOLLOW_CYLINDER",
        HalfHollowCylinder = 18 => "HALF_HOLLOW_CYLINDER",
        QuarterHollowCylinder = 19 => "QUARTER_HOLLOW_CYLINDER",
        Hole = 20 => "HOLE",
        Arch = 21 => "ARCH",
        HalfArch = 22 => "HALF_ARCH",
        Pentagon = 23 => "PENTAGON",
        Hexagon = 24 => "HEXAGON",
        Heptagon = 25 => "HEPTAGON",
        Octagon = 26 => "OCTAGON",
        Star = 27 => "STAR",
        Heart = 28 => "HEART",
        OpenCrescent = 29 => "OPEN_CRESCENT",
        ClosingCrescent = 30 => "CLOSING_CRESCENT",
        Egg = 31 => "EGG",
        Loop = 32 => "LOOP",
    }
}

code_enum! {
    /// Surface patterns. Checkerboard is the default.
    pub enum BlockPattern {
        Checkerboard = 0 => "CHECKERBOARD",
        Hex = 1 => "HEX",
        Stripes = 2 => "STRIPES",
        Planks = 3 => "PLANKS",
        ZigZag = 4 => "ZIG_ZAG",
        Bricks = 5 => "BRICKS",
        LargeBricks = 6 => "LARGE_BRICKS",
        Waves = 7 => "WAVES",
        Chevron = 8 => "CHEVRON",
        Geometric = 9 => "GEOMETRIC",
        HorizontalStripes = 10 => "HORIZONTAL_STRIPES",
        VerticalStripes = 11 => "VERTICAL_STRIPES",
        X = 12 => "X",
        Plate = 13 => "PLATE",
        Radial = 14 => "RADIAL",
        Arrow = 15 => "ARROW",
        Circles = 16 => "CIRCLES",
        EvenCircles = 17 => "EVEN_CIRCLES",
        MessyCircles = 18 => "MESSY_CIRCLES",
        Squares = 19 => "SQUARES",
        EvenSquares = 20 => "EVEN_SQUARES",
        MessySquares = 21 => "MESSY_SQUARES",
        Triangles = 22 => "TRIANGLES",
        EvenTriangles = 23 => "EVEN_TRIANGLES",
        MessyTriangles = 24 => "MESSY_TRIANGLES",
        Diamonds = 25 => "DIAMONDS",
        OddDiamonds = 26 => "ODD_DIAMONDS",
        MessyDiamonds = 27 => "MESSY_DIAMONDS",
        LargeDiamonds = 28 => "LARGE_DIAMONDS",
        Stars = 29 => "STARS",
        EvenStars = 30 => "EVEN_STARS",
        MessyStars = 31 => "MESSY_STARS",
        Hearts = 32 => "HEARTS",
        EvenHearts = 33 => "EVEN_HEARTS",
        MessyHearts = 34 => "MESSY_HEARTS",
        Note = 35 => "NOTE",
        BeamedNote = 36 => "BEAMED_NOTE",
    }
}

code_enum! {
    /// Skyboxes.
    pub enum Sky {
        Day = 0 => "DAY",
        Sunset = 1 => "SUNSET",
        Night = 2 => "NIGHT",
        Raindrop = 3 => "RAINDROP",
        Alien = 4 => "ALIEN",
        Dull = 5 => "DULL",
        Winter = 6 => "WINTER",
        Infernal = 7 => "INFERNAL",
        Flame = 8 => "FLAME",
        Golden = 9 => "GOLDEN",
        Violet = 10 => "VIOLET",
        TheSun = 11 => "THE_SUN",
        Halloween = 12 => "HALLOWEEN",
        Overcast = 13 => "OVERCAST",
        StarlitCity = 14 => "STARLIT_CITY",
        Void = 15 => "VOID",
        Desert = 16 => "DESERT",
        FarGone = 17 => "FAR_GONE",
        Sunken = 18 => "SUNKEN",
        Eggstar = 19 => "EGGSTAR",
        Bloom = 20 => "BLOOM",
        Dependence = 21 => "DEPENDENCE",
        Rapture = 22 => "RAPTURE",
        Wastes = 23 => "WASTES",
    }
}

code_enum! {
    pub enum Weather {
        Clear = 0 => "CLEAR",
        Snow = 1 => "SNOW",
        Rain = 2 => "RAIN",
        Void = 3 => "VOID",
        Autumn = 4 => "AUTUMN",
    }
}

code_enum! {
    /// Sound ids. Instruments (11-14) are tuned; the rest may need pitch
    /// adjustment and looping sounds keep looping.
    pub enum Sound {
        Spring = 0 => "SPRING",
        CompletionStar = 1 => "COMPLETION_STAR",
        Token = 2 => "TOKEN",
        Splash = 3 => "SPLASH",
        Disappear = 4 => "DISAPPEAR",
        CannonEnter = 5 => "CANNON_ENTER",
        NoteLoop = 6 => "NOTE_LOOP",
        Fireworks = 7 => "FIREWORKS",
        PortalAmbience = 8 => "PORTAL_AMBIENCE",
        PortalEnter = 9 => "PORTAL_ENTER",
        PortalExit = 10 => "PORTAL_EXIT",
        Piano = 11 => "PIANO",
        Chord = 12 => "CHORD",
        Synth = 13 => "SYNTH",
        Viola = 14 => "VIOLA",
        StarCollect = 15 => "STAR_COLLECT",
    }
}

code_enum! {
    /// Soundtrack ids for the level playlist.
    pub enum Music {
        Serene = 0 => "SERENE",
        SwayingDreams = 1 => "SWAYING_DREAMS",
        PlayfulWaltz = 2 => "PLAYFUL_WALTZ",
        SicilianStreet = 3 => "SICILIAN_STREET",
        Contemplation = 4 => "CONTEMPLATION",
        CaveAmbience = 5 => "CAVE_AMBIENCE",
        Funky = 6 => "FUNKY",
        DarknessApproaches = 7 => "DARKNESS_APPROACHES",
        Carnival = 8 => "CARNIVAL",
        LateNightFireworks = 9 => "LATE_NIGHT_FIREWORKS",
        IDontKnow = 10 => "I_DONT_KNOW",
        WinterForest = 11 => "WINTER_FOREST",
        AssaultOnTheEarDrums = 12 => "ASSAULT_ON_THE_EAR_DRUMS",
        BloodMoon = 13 => "BLOOD_MOON",
        Organ = 14 => "ORGAN",
        Bamba = 15 => "BAMBA",
        Tortuga = 16 => "TORTUGA",
        FrivolousFlutes = 17 => "FRIVOLOUS_FLUTES",
        Peaceful = 18 => "PEACEFUL",
        SixtyFour = 64 => "SIXTY_FOUR",
    }
}

impl Music {
    /// Placeholder name the track shipped under before it was titled.
    #[deprecated(note = "use Music::Organ")]
    pub const ISAIAH_NEW_SONG: Self = Self::Organ;
}

code_enum! {
    /// Clothing texture a decal image was uploaded as.
    pub enum DecalType {
        Shirt = 0 => "SHIRT",
        PantsFrontLeft = 1 => "PANTS_FRONT_LEFT",
        PantsFrontRight = 2 => "PANTS_FRONT_RIGHT",
    }
}

code_enum! {
    /// Grate textures (grates only).
    pub enum GratesStyle {
        Grid = 0 => "GRID",
        X = 1 => "X",
        Box = 2 => "BOX",
        RoundedBox = 3 => "ROUNDED_BOX",
        Tiles = 4 => "TILES",
        OverlappingTiles = 5 => "OVERLAPPING_TILES",
    }
}
