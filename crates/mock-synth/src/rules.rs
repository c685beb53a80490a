//! Rule-based synthesizer - a deterministic, non-AI alert writer.

use async_trait::async_trait;
use hazard_core::{
    AlertAssessment, AlertSynthesisRequest, AlertSynthesizer, EnrichedDisaster, HazardKind,
    Language, SynthesisError,
};

/// Order in which flagged hazards are preferred when several are flagged.
///
/// Direct-proximity hazards come first, regional ones after, and flood (which
/// carries no distance) last.
pub const PRIORITY: [HazardKind; 6] = [
    HazardKind::Fire,
    HazardKind::Landslide,
    HazardKind::Volcano,
    HazardKind::Earthquake,
    HazardKind::Whirlwind,
    HazardKind::Flood,
];

/// Fixed alert text for one hazard in one language.
struct AlertCopy {
    title: &'static str,
    recommendations: &'static [&'static str],
}

/// Writes alerts from a fixed table instead of a language model.
///
/// Picks the flagged hazard that comes first in [`PRIORITY`] and fills in
/// canned, localized text. Useful when no model is configured and as the
/// reference behaviour in tests.
#[derive(Debug, Clone, Default)]
pub struct RuleBasedSynthesizer;

impl RuleBasedSynthesizer {
    /// Create a new RuleBasedSynthesizer.
    pub fn new() -> Self {
        Self
    }

    /// The flagged hazard that would be reported, if any.
    pub fn select<'a>(&self, request: &'a AlertSynthesisRequest) -> Option<&'a EnrichedDisaster> {
        PRIORITY
            .iter()
            .find_map(|kind| request.high_risk().find(|entry| entry.kind == *kind))
    }
}

#[async_trait]
impl AlertSynthesizer for RuleBasedSynthesizer {
    async fn synthesize(
        &self,
        request: &AlertSynthesisRequest,
    ) -> Result<AlertAssessment, SynthesisError> {
        let Some(entry) = self.select(request) else {
            return Ok(AlertAssessment::not_at_risk());
        };

        let copy = copy_for(entry.kind, request.language);

        Ok(AlertAssessment {
            is_at_risk: true,
            risk_type: entry.kind.label_in(request.language).to_string(),
            alert_title: copy.title.to_string(),
            alert_message: message_for(entry, request.language),
            risk_distance_km: entry.distance_km,
            safety_recommendations: copy
                .recommendations
                .iter()
                .map(|r| r.to_string())
                .collect(),
        })
    }

    fn name(&self) -> &str {
        "RuleBasedSynthesizer"
    }
}

fn message_for(entry: &EnrichedDisaster, language: Language) -> String {
    match (entry.distance_km, language) {
        (Some(km), Language::English) => format!(
            "{}. The hazard is about {:.0} km from your location, inside the unsafe radius.",
            entry.details, km
        ),
        (Some(km), Language::Indonesian) => format!(
            "{}. Bahaya ini berjarak sekitar {:.0} km dari lokasi Anda, di dalam radius tidak aman.",
            entry.details, km
        ),
        (None, Language::English) => format!(
            "{}. Areas downstream along the Ciliwung river may be affected.",
            entry.details
        ),
        (None, Language::Indonesian) => format!(
            "{}. Wilayah hilir di sepanjang Sungai Ciliwung dapat terdampak.",
            entry.details
        ),
    }
}

fn copy_for(kind: HazardKind, language: Language) -> AlertCopy {
    match (kind, language) {
        (HazardKind::Fire, Language::English) => AlertCopy {
            title: "Active fire near you",
            recommendations: &[
                "Move away from the fire and stay upwind of the smoke.",
                "Cover your nose and mouth with a damp cloth if smoke reaches you.",
                "Keep roads clear for fire trucks and follow instructions from firefighters.",
                "Call 113 to report new flames or trapped people.",
            ],
        },
        (HazardKind::Fire, Language::Indonesian) => AlertCopy {
            title: "Kebakaran aktif di dekat Anda",
            recommendations: &[
                "Menjauh dari api dan tetap berada di arah datangnya angin.",
                "Tutup hidung dan mulut dengan kain basah jika asap mencapai Anda.",
                "Kosongkan jalan untuk mobil pemadam dan ikuti arahan petugas.",
                "Hubungi 113 untuk melaporkan api baru atau orang yang terjebak.",
            ],
        },
        (HazardKind::Landslide, Language::English) => AlertCopy {
            title: "High landslide risk in your area",
            recommendations: &[
                "Stay away from steep slopes, cliffs and river banks.",
                "Watch for cracks in the ground, tilting trees or sudden muddy water.",
                "Prepare to evacuate to higher, stable ground if rain continues.",
                "Avoid travelling on roads below hillsides.",
            ],
        },
        (HazardKind::Landslide, Language::Indonesian) => AlertCopy {
            title: "Risiko tanah longsor tinggi di wilayah Anda",
            recommendations: &[
                "Jauhi lereng curam, tebing, dan tepi sungai.",
                "Waspadai retakan tanah, pohon miring, atau air keruh yang tiba-tiba muncul.",
                "Bersiap mengungsi ke tempat yang lebih tinggi dan stabil jika hujan berlanjut.",
                "Hindari perjalanan di jalan di bawah perbukitan.",
            ],
        },
        (HazardKind::Volcano, Language::English) => AlertCopy {
            title: "Elevated volcanic activity nearby",
            recommendations: &[
                "Do not approach the crater or the restricted zone.",
                "Keep masks and eye protection ready in case of ash fall.",
                "Prepare an emergency bag and know your evacuation route.",
                "Follow updates from PVMBG and local authorities.",
            ],
        },
        (HazardKind::Volcano, Language::Indonesian) => AlertCopy {
            title: "Aktivitas gunung api meningkat di dekat Anda",
            recommendations: &[
                "Jangan mendekati kawah atau zona terlarang.",
                "Siapkan masker dan pelindung mata untuk antisipasi hujan abu.",
                "Siapkan tas darurat dan ketahui jalur evakuasi Anda.",
                "Ikuti informasi dari PVMBG dan pemerintah setempat.",
            ],
        },
        (HazardKind::Earthquake, Language::English) => AlertCopy {
            title: "Significant earthquake near you",
            recommendations: &[
                "Drop, cover and hold on if shaking starts again.",
                "Stay away from windows, shelves and heavy furniture.",
                "Check your building for damage before going back inside.",
                "Expect aftershocks in the coming hours.",
            ],
        },
        (HazardKind::Earthquake, Language::Indonesian) => AlertCopy {
            title: "Gempa bumi signifikan di dekat Anda",
            recommendations: &[
                "Merunduk, berlindung, dan berpegangan jika guncangan terjadi lagi.",
                "Jauhi jendela, rak, dan perabot berat.",
                "Periksa kerusakan bangunan sebelum masuk kembali.",
                "Waspadai gempa susulan dalam beberapa jam ke depan.",
            ],
        },
        (HazardKind::Whirlwind, Language::English) => AlertCopy {
            title: "Strong winds approaching your area",
            recommendations: &[
                "Stay indoors and away from windows.",
                "Secure or bring in loose objects outside your home.",
                "Avoid parking or sheltering under trees and billboards.",
                "Keep a flashlight and charged phone ready in case of power cuts.",
            ],
        },
        (HazardKind::Whirlwind, Language::Indonesian) => AlertCopy {
            title: "Angin kencang mendekati wilayah Anda",
            recommendations: &[
                "Tetap di dalam ruangan dan jauhi jendela.",
                "Amankan atau masukkan benda-benda lepas di luar rumah.",
                "Hindari parkir atau berteduh di bawah pohon dan papan reklame.",
                "Siapkan senter dan ponsel yang terisi daya jika listrik padam.",
            ],
        },
        (HazardKind::Flood, Language::English) => AlertCopy {
            title: "Flood alert at Katulampa Dam",
            recommendations: &[
                "Move valuables and electrical items to higher floors.",
                "Avoid walking or driving through flood water.",
                "Prepare to evacuate if you live near the Ciliwung river.",
                "Monitor updates from BPBD and the Katulampa Dam gauge.",
            ],
        },
        (HazardKind::Flood, Language::Indonesian) => AlertCopy {
            title: "Peringatan banjir di Bendung Katulampa",
            recommendations: &[
                "Pindahkan barang berharga dan peralatan listrik ke tempat yang lebih tinggi.",
                "Hindari berjalan atau berkendara melewati genangan banjir.",
                "Bersiap mengungsi jika Anda tinggal di dekat Sungai Ciliwung.",
                "Pantau informasi dari BPBD dan pos pantau Bendung Katulampa.",
            ],
        },
    }
}
