use clap::Parser;
use favscrape::{process::process_users, Result, FILE_PATH};
use tracing::Level;

#[derive(Parser, Debug)]
#[command(name = "favscrape", about = "Scrapes engagement metrics for Scratch users' projects", version)]
struct Args {
    /// Increase output verbosity
    #[arg(long)]
    verbose: bool,

    /// Increase output verbosity for debugging
    #[arg(long)]
    debug: bool,
}

/// Users to analyze. The list is ordered and may contain duplicates; a
/// duplicate user is simply processed twice.
const USERS: &[&str] = &[
    "csf30523", "csf30524", "csf30525", "csf30526", "csf30527", "csf30528", "csf30533", "csf30545",
    "csf30546", "csf30548", "csf30557", "csf30565", "csf33028", "csf24235", "csf24236", "csf24241",
    "csf24248", "csf24251", "csf24323", "csf24324", "csf24330", "csf24436", "csf24440", "csf24441",
    "csf24442", "csf24443", "csf24444", "csf24445", "csf24446", "csf24451", "csf24453", "csf36976",
    "csf36978", "csf36981", "csf36984", "csf37049", "csf23643", "csf23648", "csf23650", "csf23760",
    "csf23763", "csf24286", "csf28465", "csf15927", "csf15905", "csf15890", "csf15933", "csf1503",
    "csf15910", "csf15900", "csf15897", "csf15917", "csf15899", "csf15951", "csf15941", "csf15922",
    "csf16067", "csf15457", "csf15430", "csf15470", "csf15433", "csf15444", "csf15445", "csf15432",
    "csf16971", "csf15475", "csf15442", "csf15447", "csf15450", "csf15452", "csf15439", "csf15472",
    "csf15434", "csf15465", "csf15455", "csf15460", "csf16975", "csf15440", "csf15468", "csf15446",
    "csf15463", "csf15461", "csf15464", "csf15441", "csf15479", "csf15482", "csf15466", "csf15201",
    "csf15171", "csf34613", "csf15176", "csf15214", "csf15179", "csf15174", "csf15192", "csf15219",
    "csf15209", "csf15188", "csf15198", "csf15202", "csf15180", "csf15211", "csf15193", "csf15177",
    "csf15200", "csf15226", "csf15224", "csf15227", "csf15217", "csf15203", "csf15205", "csf15210",
    "csf35418", "csf34526", "csf15022", "csf14975", "csf15035", "csf15041", "csf15021", "csf15020",
    "csf14978", "csf14976", "csf14973", "csf15051", "csf14992", "csf14994", "csf14983", "csf15034",
    "csf15013", "csf15030", "csf15042", "csf15008", "csf34530", "csf15050", "csf15073", "csf14995",
    "csf14974", "csf14987", "csf15011", "csf14990", "csf15019", "csf15028", "csf15047", "csf16553",
    "csf14981", "csf15023", "csf16544", "csf15029", "csf15026", "csf24184", "csf24185", "csf24186",
    "csf24187", "csf24188", "csf24189", "csf24191", "csf30691", "csf30692", "csf44476", "csf34772",
    "csf42455", "csf42599", "csf42605", "csf42611", "csf42612", "csf42614", "csf42616", "csf42618",
    "csf44391", "csf44393", "csf44394", "csf44480", "csf44483", "csf42663", "csf42666", "csf42670",
    "csf42672", "csf42679", "csf42682", "csf42683", "csf42757", "csf42794", "csf2778", "csf42909",
    "csf42916", "csf42918", "csf42922", "csf42924", "csf2936", "csf43055", "csf43063", "csf43064",
    "csf43070", "csf43093", "csf43105", "csf40804", "csf40805", "csf40809", "csf40810", "csf40811",
    "csf40812", "csf40815", "csf40816", "csf40817", "csf40818", "csf40822", "csf40823", "csf44246",
    "csf41386", "csf41309", "csf41310", "csf41311", "csf41313", "csf41314", "csf41315", "csf41316",
    "csf41317", "csf31126", "csf41321", "csf41323", "csf41326", "csf41327", "csf41328", "csf41329",
    "csf41330", "csf41385", "csf41386", "csf41388", "csf41389", "csf41390", "csf41392", "csf41395",
    "csf41397", "csf41398", "csf43656", "csf31116", "csf41396", "csf40811", "csf41394", "csf41396",
    "csf41399", "csf41398", "csf41385", "csf41386", "csf41388", "csf41392", "csf41395", "csf41390",
    "csf41389", "csf34680", "csf27077", "csf27080", "csf27082", "csf27089", "csf27090", "csf27091",
    "csf27093", "csf27096", "csf27097", "csf27100", "csf30895", "csf30896", "csf26932", "csf34880",
    "csf40717", "csf42999", "csf35859", "csf35860", "csf35861", "csf35862", "csf35863", "csf35865",
    "csf35866", "csf35868", "csf35869", "csf35870", "csf35871", "csf35872", "csf35874", "csf35877",
    "csf35878", "csf35882", "csf35883", "csf35885", "csf35886", "csf35887",
];

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let level = if args.debug {
        Level::DEBUG
    } else if args.verbose {
        Level::INFO
    } else {
        Level::WARN
    };
    tracing_subscriber::fmt().with_max_level(level).init();

    let client = reqwest::Client::new();
    process_users(&client, USERS, FILE_PATH).await
}
