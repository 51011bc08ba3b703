/// Towns offered for browsing, in display order.
///
/// Static configuration, not derived from the dataset: a town listed here may
/// have no items, in which case the town query reports no matches.
pub const KNOWN_TOWNS: [&str; 94] = [
    "nairobi",
    "kitengela",
    "karen",
    "syokimau",
    "athi river",
    "bomet",
    "eldoret",
    "watamu",
    "malindi",
    "kikambala",
    "malindi marine national park",
    "kakamega",
    "nairobi region",
    "kiambu",
    "lavington",
    "thika",
    "narok",
    "ruaka",
    "nyeri",
    "langata",
    "kilifi",
    "ngong",
    "kiserian",
    "ongata rongai",
    "kahawa",
    "mombasa",
    "shanzu",
    "bamburi",
    "mtwapa",
    "likoni",
    "kitale",
    "kwale",
    "tiwi",
    "lake elementaita",
    "nakuru",
    "lake nakuru national park",
    "lamu island",
    "shela",
    "matuu",
    "masii",
    "mtito andei",
    "nanyuki town",
    "nyahururu",
    "kikuyu",
    "limuru",
    "siaya",
    "juja",
    "diani beach",
    "ukunda",
    "naivasha",
    "maasai mara national reserve",
    "sekenani",
    "kisumu",
    "mambrui",
    "nanyuki municipality",
    "embu",
    "meru town",
    "kisii",
    "machakos",
    "naboisho conservancy",
    "ololaimutiek",
    "kajiado",
    "migori",
    "tsavo national park west",
    "ruiru",
    "bungoma",
    "isiolo",
    "kericho",
    "tsavo",
    "gilgil",
    "galu beach",
    "voi",
    "tsavo national park east",
    "busia",
    "kitui",
    "mara north conservancy",
    "olderkesi private reserve",
    "shella",
    "narasha",
    "kuwinda",
    "kwoyo",
    "maai mahiu",
    "talek",
    "homa bay",
    "mount kenya national park",
    "mbita",
    "samburu national reserve",
    "mwingi",
    "mlolongo",
    "lodwar",
    "sagana",
    "bondo",
    "amboseli national park",
    "naro moru",
];
