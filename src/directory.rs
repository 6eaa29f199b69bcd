use chrono::NaiveDate;

use crate::models::{
    AvailabilityDay, BookingRecord, BookingStatus, Credential, Professional, Role, UserSession,
    VerificationDocument, VerificationRequest, VerificationStatus,
};

/// Read-only directory data source. The live system would back this with a
/// database; here it serves the seeded launch dataset from memory.
pub struct Directory {
    professionals: Vec<Professional>,
    bookings: Vec<BookingRecord>,
    verifications: Vec<VerificationRequest>,
}

impl Directory {
    pub fn seeded() -> Self {
        Self {
            professionals: seed_professionals(),
            bookings: seed_bookings(),
            verifications: seed_verifications(),
        }
    }

    pub fn professionals(&self) -> &[Professional] {
        &self.professionals
    }

    /// Directory search: free-text over name/specialization/location, plus an
    /// exact specialization filter.
    pub fn search_professionals(
        &self,
        query: Option<&str>,
        specialization: Option<&str>,
    ) -> Vec<&Professional> {
        self.professionals
            .iter()
            .filter(|p| {
                specialization
                    .map(|s| p.specialization.eq_ignore_ascii_case(s))
                    .unwrap_or(true)
            })
            .filter(|p| {
                query
                    .map(|q| {
                        let q = q.to_lowercase();
                        p.name.to_lowercase().contains(&q)
                            || p.specialization.to_lowercase().contains(&q)
                            || p.location.to_lowercase().contains(&q)
                    })
                    .unwrap_or(true)
            })
            .collect()
    }

    pub fn find_professional(&self, id: &str) -> Option<&Professional> {
        self.professionals.iter().find(|p| p.id == id)
    }

    pub fn bookings(&self) -> &[BookingRecord] {
        &self.bookings
    }

    pub fn verifications(&self) -> &[VerificationRequest] {
        &self.verifications
    }

    pub fn verifications_with_status(
        &self,
        status: VerificationStatus,
    ) -> Vec<&VerificationRequest> {
        self.verifications
            .iter()
            .filter(|v| v.status == status)
            .collect()
    }

    pub fn find_verification(&self, id: &str) -> Option<&VerificationRequest> {
        self.verifications.iter().find(|v| v.id == id)
    }

    /// The demo signed-in user. The role claim comes from the caller instead
    /// of being baked into a view.
    pub fn demo_session(&self, role: Role) -> UserSession {
        UserSession {
            id: "1".to_string(),
            name: "John Doe".to_string(),
            email: "john@example.com".to_string(),
            role,
        }
    }
}

fn d(s: &str) -> NaiveDate {
    s.parse().expect("seed date literal")
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn day(date: &str, slots: &[&str]) -> AvailabilityDay {
    AvailabilityDay {
        date: d(date),
        slots: strings(slots),
    }
}

#[allow(clippy::too_many_arguments)]
fn professional(
    id: &str,
    name: &str,
    specialization: &str,
    location: &str,
    bio: &str,
    rating: f64,
    review_count: u32,
    verified: bool,
    years_experience: u32,
    consultation_fee: i64,
    languages: &[&str],
    availability: Vec<AvailabilityDay>,
) -> Professional {
    Professional {
        id: id.to_string(),
        name: name.to_string(),
        specialization: specialization.to_string(),
        location: location.to_string(),
        bio: bio.to_string(),
        rating,
        review_count,
        verified,
        years_experience,
        consultation_fee,
        languages: strings(languages),
        availability,
    }
}

fn seed_professionals() -> Vec<Professional> {
    vec![
        professional(
            "1",
            "Dr. Sarah Johnson",
            "Developmental Pediatrics",
            "Lagos, Nigeria",
            "Specialized in early intervention and developmental assessments for children \
             with IDDs. Over 15 years of experience working with families.",
            4.9,
            127,
            true,
            15,
            25000,
            &["English", "Yoruba"],
            vec![
                day(
                    "2024-01-22",
                    &["9:00 AM", "10:00 AM", "11:00 AM", "2:00 PM", "3:00 PM", "4:00 PM"],
                ),
                day("2024-01-23", &["9:00 AM", "10:00 AM", "11:00 AM", "2:00 PM", "3:00 PM"]),
                day("2024-01-24", &["9:00 AM", "10:00 AM", "11:00 AM"]),
                day(
                    "2024-01-25",
                    &["9:00 AM", "10:00 AM", "11:00 AM", "2:00 PM", "3:00 PM", "4:00 PM"],
                ),
                day("2024-01-26", &["9:00 AM", "10:00 AM", "11:00 AM"]),
            ],
        ),
        professional(
            "2",
            "Dr. Michael Adebayo",
            "Speech Therapy",
            "Abuja, Nigeria",
            "Expert in communication disorders and speech development for individuals with \
             autism and other developmental disabilities.",
            4.8,
            89,
            true,
            12,
            20000,
            &["English", "Hausa"],
            vec![],
        ),
        professional(
            "3",
            "Dr. Fatima Hassan",
            "Occupational Therapy",
            "Port Harcourt, Nigeria",
            "Helping individuals with IDDs develop daily living skills and achieve greater \
             independence through personalized therapy programs.",
            5.0,
            156,
            true,
            18,
            22000,
            &["English", "Igbo"],
            vec![],
        ),
        professional(
            "4",
            "Dr. Ahmed Musa",
            "Behavioral Therapy",
            "Kano, Nigeria",
            "Specialized in Applied Behavior Analysis (ABA) and positive behavior support for \
             individuals with autism and developmental disabilities.",
            4.7,
            94,
            true,
            10,
            18000,
            &["English", "Hausa"],
            vec![],
        ),
        professional(
            "5",
            "Dr. Grace Okafor",
            "Special Education",
            "Enugu, Nigeria",
            "Educational specialist focusing on individualized learning plans and academic \
             support for students with intellectual disabilities.",
            4.9,
            112,
            false,
            8,
            15000,
            &["English", "Igbo"],
            vec![],
        ),
        professional(
            "6",
            "Dr. Ibrahim Yusuf",
            "Psychiatry",
            "Kaduna, Nigeria",
            "Child and adolescent psychiatrist with expertise in mental health support for \
             individuals with developmental disabilities.",
            4.6,
            78,
            true,
            14,
            30000,
            &["English", "Hausa"],
            vec![],
        ),
    ]
}

fn booking(
    id: &str,
    professional_name: &str,
    professional_specialization: &str,
    date: &str,
    time: &str,
    status: BookingStatus,
    patient_name: &str,
    fee: i64,
    notes: &str,
) -> BookingRecord {
    BookingRecord {
        id: id.to_string(),
        professional_name: professional_name.to_string(),
        professional_specialization: professional_specialization.to_string(),
        date: d(date),
        time: time.to_string(),
        duration_minutes: 60,
        status,
        patient_name: patient_name.to_string(),
        fee,
        notes: notes.to_string(),
    }
}

fn seed_bookings() -> Vec<BookingRecord> {
    vec![
        booking(
            "1",
            "Dr. Sarah Johnson",
            "Developmental Pediatrics",
            "2024-01-25",
            "10:00 AM",
            BookingStatus::Confirmed,
            "John Doe",
            25000,
            "Initial developmental assessment for 5-year-old with speech delays",
        ),
        booking(
            "2",
            "Dr. Michael Adebayo",
            "Speech Therapy",
            "2024-01-28",
            "2:00 PM",
            BookingStatus::Pending,
            "Jane Smith",
            20000,
            "Follow-up session for speech therapy progress evaluation",
        ),
        booking(
            "3",
            "Dr. Fatima Hassan",
            "Occupational Therapy",
            "2024-01-15",
            "11:00 AM",
            BookingStatus::Completed,
            "Alex Johnson",
            22000,
            "Occupational therapy assessment and treatment planning",
        ),
        booking(
            "4",
            "Dr. Ahmed Musa",
            "Behavioral Therapy",
            "2024-01-10",
            "3:00 PM",
            BookingStatus::Cancelled,
            "Sarah Wilson",
            18000,
            "Behavioral intervention consultation - cancelled due to illness",
        ),
    ]
}

fn credential(kind: &str, title: &str, institution: &str, year: &str, verified: bool) -> Credential {
    Credential {
        kind: kind.to_string(),
        title: title.to_string(),
        institution: institution.to_string(),
        year: year.to_string(),
        verified,
    }
}

fn document(kind: &str, url: &str, uploaded: &str) -> VerificationDocument {
    VerificationDocument {
        kind: kind.to_string(),
        url: url.to_string(),
        uploaded: d(uploaded),
    }
}

fn seed_verifications() -> Vec<VerificationRequest> {
    vec![
        VerificationRequest {
            id: "1".to_string(),
            name: "Dr. Adebayo Ogundimu".to_string(),
            email: "adebayo.ogundimu@email.com".to_string(),
            specialization: "Behavioral Therapy".to_string(),
            location: "Lagos, Nigeria".to_string(),
            years_experience: 8,
            submitted_date: d("2024-01-20"),
            status: VerificationStatus::Pending,
            credentials: vec![
                credential(
                    "Degree",
                    "PhD in Psychology",
                    "University of Lagos",
                    "2015",
                    false,
                ),
                credential(
                    "License",
                    "Licensed Clinical Psychologist",
                    "Psychology Board of Nigeria",
                    "2016",
                    false,
                ),
                credential(
                    "Certification",
                    "Applied Behavior Analysis (ABA) Certification",
                    "Behavior Analyst Certification Board",
                    "2018",
                    false,
                ),
            ],
            documents: vec![
                document("CV", "/documents/cv-adebayo.pdf", "2024-01-20"),
                document("Degree Certificate", "/documents/degree-adebayo.pdf", "2024-01-20"),
                document("License", "/documents/license-adebayo.pdf", "2024-01-20"),
            ],
            bio: "Experienced behavioral therapist specializing in Applied Behavior Analysis \
                  for children and adults with autism spectrum disorders and other \
                  developmental disabilities."
                .to_string(),
            consultation_fee: 18000,
            languages: strings(&["English", "Yoruba"]),
        },
        VerificationRequest {
            id: "2".to_string(),
            name: "Dr. Kemi Adeleke".to_string(),
            email: "kemi.adeleke@email.com".to_string(),
            specialization: "Speech Therapy".to_string(),
            location: "Abuja, Nigeria".to_string(),
            years_experience: 12,
            submitted_date: d("2024-01-18"),
            status: VerificationStatus::UnderReview,
            credentials: vec![
                credential(
                    "Degree",
                    "Masters in Speech-Language Pathology",
                    "University of Ibadan",
                    "2012",
                    true,
                ),
                credential(
                    "Certification",
                    "ASHA Certification",
                    "American Speech-Language-Hearing Association",
                    "2013",
                    true,
                ),
            ],
            documents: vec![
                document("CV", "/documents/cv-kemi.pdf", "2024-01-18"),
                document("Degree Certificate", "/documents/degree-kemi.pdf", "2024-01-18"),
                document("ASHA Certificate", "/documents/asha-kemi.pdf", "2024-01-18"),
            ],
            bio: "Speech-language pathologist with extensive experience in treating \
                  communication disorders in children with developmental disabilities."
                .to_string(),
            consultation_fee: 20000,
            languages: strings(&["English", "Hausa"]),
        },
        VerificationRequest {
            id: "3".to_string(),
            name: "Dr. Ibrahim Yusuf".to_string(),
            email: "ibrahim.yusuf@email.com".to_string(),
            specialization: "Occupational Therapy".to_string(),
            location: "Kano, Nigeria".to_string(),
            years_experience: 6,
            submitted_date: d("2024-01-22"),
            status: VerificationStatus::Pending,
            credentials: vec![credential(
                "Degree",
                "Masters in Occupational Therapy",
                "Ahmadu Bello University",
                "2018",
                false,
            )],
            documents: vec![
                document("CV", "/documents/cv-ibrahim.pdf", "2024-01-22"),
                document("Degree Certificate", "/documents/degree-ibrahim.pdf", "2024-01-22"),
            ],
            bio: "Occupational therapist focused on daily living skills and sensory \
                  integration for children with developmental disabilities."
                .to_string(),
            consultation_fee: 16000,
            languages: strings(&["English", "Hausa"]),
        },
    ]
}
