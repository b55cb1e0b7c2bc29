//! Static seed data standing in for a future backend.
//!
//! Everything in this module is hardcoded and fictional. No external systems
//! are contacted; the shapes here are the contract any replacement backend
//! would need to serve for the views to render unchanged.

use crate::emar::{DoseStatus, EmarHistoryEntry};
use crate::models::*;
use crate::store::AppState;

/// A fully-populated store state.
pub fn seed() -> AppState {
    AppState {
        clients: clients(),
        staff: staff(),
        incidents: incidents(),
        patches: patches(),
        timesheets: timesheets(),
        visits: visits(),
        activity_log: activity_log(),
        emar_history: emar_history(),
        dashboard_metrics: dashboard_metrics(),
        ..AppState::default()
    }
}

pub fn clients() -> Vec<Client> {
    vec![
        Client {
            id: "client-1".to_string(),
            name: "Margaret Thompson".to_string(),
            age: 84,
            gender: Gender::Female,
            address: "S1 2AB - 123 Oak Street".to_string(),
            keybox_code: "4821".to_string(),
            contact_info: ContactInfo {
                phone: "0114 273 1001".to_string(),
                email: "m.thompson@example.com".to_string(),
                emergency_contact: "0114 273 1002".to_string(),
            },
            next_of_kin: NextOfKin {
                name: "Susan Thompson".to_string(),
                relationship: "Daughter".to_string(),
                phone: "07700 900101".to_string(),
            },
            service_level: ServiceLevel::Three,
            care_needs: vec![
                "Personal Care".to_string(),
                "Medication Management".to_string(),
                "Mobility Support".to_string(),
                "Meal Preparation".to_string(),
            ],
            medications: vec![
                Medication {
                    id: "med-1".to_string(),
                    name: "Ramipril".to_string(),
                    dosage: "5mg".to_string(),
                    frequency: "Twice daily".to_string(),
                    time: "08:00, 20:00".to_string(),
                    instructions: "Take with water, before food".to_string(),
                    route: Some("Oral".to_string()),
                    low_stock: false,
                },
                Medication {
                    id: "med-2".to_string(),
                    name: "Atorvastatin".to_string(),
                    dosage: "20mg".to_string(),
                    frequency: "Once daily".to_string(),
                    time: "20:00".to_string(),
                    instructions: "Take in the evening".to_string(),
                    route: Some("Oral".to_string()),
                    low_stock: true,
                },
            ],
            gp_details: GpDetails {
                name: "Dr Helen Shaw".to_string(),
                practice: "Broomhill Surgery".to_string(),
                phone: "0114 266 2001".to_string(),
            },
            schedule: Schedule {
                kind: ScheduleType::FullDay,
                days: weekdays(),
                start_date: "2025-01-06".to_string(),
                end_date: "2025-12-19".to_string(),
            },
            patch: "North".to_string(),
            status: ClientStatus::Active,
            admission_date: "2025-01-06".to_string(),
            preferred_carer: Some("Jennifer Mills".to_string()),
            other_residents: None,
            allergies: vec!["Penicillin".to_string()],
            additional_tasks: vec!["Continence Care".to_string()],
            preferred_language: Some("English".to_string()),
            preferred_gender: Some(PreferredGender::Female),
        },
        Client {
            id: "client-2".to_string(),
            name: "Robert Davies".to_string(),
            age: 78,
            gender: Gender::Male,
            address: "S2 3CD - 456 Elm Road".to_string(),
            keybox_code: "9034".to_string(),
            contact_info: ContactInfo {
                phone: "0114 273 2001".to_string(),
                email: "r.davies@example.com".to_string(),
                emergency_contact: "0114 273 2002".to_string(),
            },
            next_of_kin: NextOfKin {
                name: "Paul Davies".to_string(),
                relationship: "Son".to_string(),
                phone: "07700 900202".to_string(),
            },
            service_level: ServiceLevel::Two,
            care_needs: vec![
                "Food Preparation".to_string(),
                "Personal Care".to_string(),
                "Medication Management".to_string(),
            ],
            medications: vec![Medication {
                id: "med-3".to_string(),
                name: "Metformin".to_string(),
                dosage: "500mg".to_string(),
                frequency: "Three times daily".to_string(),
                time: "08:00, 13:00, 18:00".to_string(),
                instructions: "Take with meals".to_string(),
                route: Some("Oral".to_string()),
                low_stock: false,
            }],
            gp_details: GpDetails {
                name: "Dr Imran Patel".to_string(),
                practice: "Manor Park Practice".to_string(),
                phone: "0114 266 2002".to_string(),
            },
            schedule: Schedule {
                kind: ScheduleType::Am,
                days: weekdays(),
                start_date: "2025-03-10".to_string(),
                end_date: "2025-09-26".to_string(),
            },
            patch: "South".to_string(),
            status: ClientStatus::EndingSoon,
            admission_date: "2025-03-10".to_string(),
            preferred_carer: None,
            other_residents: Some("Wife, Joan".to_string()),
            allergies: vec![],
            additional_tasks: vec!["Diabetic Care".to_string()],
            preferred_language: Some("English".to_string()),
            preferred_gender: None,
        },
        Client {
            id: "client-3".to_string(),
            name: "Dorothy Williams".to_string(),
            age: 91,
            gender: Gender::Female,
            address: "S3 4EF - 789 Pine Avenue".to_string(),
            keybox_code: "2277".to_string(),
            contact_info: ContactInfo {
                phone: "0114 273 3001".to_string(),
                email: "d.williams@example.com".to_string(),
                emergency_contact: "0114 273 3002".to_string(),
            },
            next_of_kin: NextOfKin {
                name: "Grace Bell".to_string(),
                relationship: "Niece".to_string(),
                phone: "07700 900303".to_string(),
            },
            service_level: ServiceLevel::Four,
            care_needs: vec![
                "Personal Care".to_string(),
                "Medication Management".to_string(),
                "Manual Handling (2 Person)".to_string(),
                "Complex Mobility Support".to_string(),
            ],
            medications: vec![
                Medication {
                    id: "med-4".to_string(),
                    name: "Donepezil".to_string(),
                    dosage: "10mg".to_string(),
                    frequency: "Once daily".to_string(),
                    time: "21:00".to_string(),
                    instructions: "Take at bedtime".to_string(),
                    route: Some("Oral".to_string()),
                    low_stock: false,
                },
                Medication {
                    id: "med-5".to_string(),
                    name: "Co-codamol".to_string(),
                    dosage: "8/500mg".to_string(),
                    frequency: "Four times daily".to_string(),
                    time: "08:00, 12:00, 16:00, 20:00".to_string(),
                    instructions: "Max 8 tablets in 24 hours".to_string(),
                    route: Some("Oral".to_string()),
                    low_stock: true,
                },
            ],
            gp_details: GpDetails {
                name: "Dr Alice Kerr".to_string(),
                practice: "Firth Park Surgery".to_string(),
                phone: "0114 266 2003".to_string(),
            },
            schedule: Schedule {
                kind: ScheduleType::FullDay,
                days: all_days(),
                start_date: "2024-11-04".to_string(),
                end_date: "2026-01-30".to_string(),
            },
            patch: "Central".to_string(),
            status: ClientStatus::Active,
            admission_date: "2024-11-04".to_string(),
            preferred_carer: None,
            other_residents: None,
            allergies: vec!["Latex".to_string(), "Aspirin".to_string()],
            additional_tasks: vec!["End of Life Care".to_string()],
            preferred_language: Some("English".to_string()),
            preferred_gender: Some(PreferredGender::NoPreference),
        },
        Client {
            id: "client-4".to_string(),
            name: "Arthur Pemberton".to_string(),
            age: 69,
            gender: Gender::Male,
            address: "S6 1GH - 12 Rivelin Close".to_string(),
            keybox_code: "5150".to_string(),
            contact_info: ContactInfo {
                phone: "0114 273 4001".to_string(),
                email: "a.pemberton@example.com".to_string(),
                emergency_contact: "0114 273 4002".to_string(),
            },
            next_of_kin: NextOfKin {
                name: "Claire Pemberton".to_string(),
                relationship: "Daughter".to_string(),
                phone: "07700 900404".to_string(),
            },
            service_level: ServiceLevel::One,
            care_needs: vec![
                "Food Preparation".to_string(),
                "Shopping".to_string(),
                "Companionship".to_string(),
            ],
            medications: vec![],
            gp_details: GpDetails {
                name: "Dr Helen Shaw".to_string(),
                practice: "Broomhill Surgery".to_string(),
                phone: "0114 266 2001".to_string(),
            },
            schedule: Schedule {
                kind: ScheduleType::Pm,
                days: vec!["Saturday".to_string(), "Sunday".to_string()],
                start_date: "2025-08-18".to_string(),
                end_date: "2026-02-27".to_string(),
            },
            patch: "West".to_string(),
            status: ClientStatus::Pending,
            admission_date: "2025-08-18".to_string(),
            preferred_carer: None,
            other_residents: None,
            allergies: vec![],
            additional_tasks: vec![],
            preferred_language: Some("English".to_string()),
            preferred_gender: None,
        },
    ]
}

pub fn staff() -> Vec<Staff> {
    vec![
        staff_member(
            "staff-1",
            "Jennifer Mills",
            "SC100234",
            Gender::Female,
            "Central Sheffield",
            Transport::Car,
            &["North", "Central"],
            &["English"],
            &["Medication Management", "Manual Handling", "First Aid"],
            StaffStatus::Active,
            StaffRole::Carer,
            true,
            true,
        ),
        staff_member(
            "staff-2",
            "Michael Chen",
            "SC100871",
            Gender::Male,
            "North Sheffield",
            Transport::Car,
            &["North", "Northeast"],
            &["English", "Mandarin"],
            &["Personal Care", "Diabetic Care"],
            StaffStatus::Active,
            StaffRole::Carer,
            true,
            false,
        ),
        staff_member(
            "staff-3",
            "Sarah Ahmed",
            "SC101455",
            Gender::Female,
            "West Sheffield",
            Transport::Public,
            &["West", "South"],
            &["English", "Urdu"],
            &["Personal Care", "End of Life Care"],
            StaffStatus::Active,
            StaffRole::Carer,
            false,
            true,
        ),
        staff_member(
            "staff-4",
            "Tomasz Kowalski",
            "SC102019",
            Gender::Male,
            "South Sheffield",
            Transport::Bicycle,
            &["South", "Southeast"],
            &["English", "Polish"],
            &["Manual Handling", "Mobility Support"],
            StaffStatus::Leave,
            StaffRole::Carer,
            true,
            true,
        ),
        staff_member(
            "staff-5",
            "Priya Sharma",
            "SC102640",
            Gender::Female,
            "Central Sheffield",
            Transport::Walking,
            &["Central"],
            &["English", "Hindi"],
            &["Assessments", "Care Planning"],
            StaffStatus::Training,
            StaffRole::Assessor,
            true,
            false,
        ),
    ]
}

#[allow(clippy::too_many_arguments)]
fn staff_member(
    id: &str,
    name: &str,
    ref_number: &str,
    gender: Gender,
    address: &str,
    transport: Transport,
    patches: &[&str],
    languages: &[&str],
    skills: &[&str],
    status: StaffStatus,
    role: StaffRole,
    am: bool,
    pm: bool,
) -> Staff {
    let mut schedule = WeekSchedule::default();
    for day in [
        &mut schedule.monday,
        &mut schedule.tuesday,
        &mut schedule.wednesday,
        &mut schedule.thursday,
        &mut schedule.friday,
    ] {
        day.am = am;
        day.pm = pm;
    }
    Staff {
        id: id.to_string(),
        name: name.to_string(),
        staff_ref_number: ref_number.to_string(),
        gender,
        contact_info: StaffContactInfo {
            phone: "0114 200 0000".to_string(),
            email: format!(
                "{}@careboard.example.com",
                name.to_lowercase().replace(' ', ".")
            ),
            address: address.to_string(),
        },
        transport,
        patches: patches.iter().map(|p| p.to_string()).collect(),
        languages: languages.iter().map(|l| l.to_string()).collect(),
        skills: skills.iter().map(|s| s.to_string()).collect(),
        id_number: ref_number.to_string(),
        status,
        role,
        availability: schedule.availability(),
        metrics: StaffMetrics {
            total_hours: 128.5,
            mileage: 342.0,
            shifts_completed: 47,
        },
        work_schedule: schedule,
        car_reg: matches!(transport, Transport::Car).then(|| "YS21 KXB".to_string()),
        postcode: Some("S1 4PQ".to_string()),
        join_date: Some("2023-05-15".to_string()),
        left_date: None,
        preferred_district: patches.first().map(|p| p.to_string()),
    }
}

pub fn incidents() -> Vec<Incident> {
    vec![
        Incident {
            id: "inc-1".to_string(),
            title: "Client Fall".to_string(),
            description: "Client slipped in the kitchen while the carer was preparing lunch. No head injury; bruising to the left hip.".to_string(),
            client_name: "Margaret Thompson".to_string(),
            location: "North Sheffield".to_string(),
            severity: Severity::High,
            status: IncidentStatus::Open,
            reported_by: "Jennifer Mills".to_string(),
            date_reported: "2025-08-21T09:30:00".to_string(),
            immediate_actions: Some("Helped client to chair, checked for injury, informed family".to_string()),
            witnesses: None,
        },
        Incident {
            id: "inc-2".to_string(),
            title: "Medication Error".to_string(),
            description: "Evening dose signed for but blister pack count does not match the MAR sheet.".to_string(),
            client_name: "Dorothy Williams".to_string(),
            location: "Central Sheffield".to_string(),
            severity: Severity::Critical,
            status: IncidentStatus::Investigating,
            reported_by: "Priya Sharma".to_string(),
            date_reported: "2025-08-19T20:15:00".to_string(),
            immediate_actions: Some("Pharmacy contacted for a recount".to_string()),
            witnesses: None,
        },
        Incident {
            id: "inc-3".to_string(),
            title: "No Access".to_string(),
            description: "Keybox code failed on the morning call; client did not answer the door or phone.".to_string(),
            client_name: "Robert Davies".to_string(),
            location: "South Sheffield".to_string(),
            severity: Severity::Medium,
            status: IncidentStatus::Resolved,
            reported_by: "Sarah Ahmed".to_string(),
            date_reported: "2025-08-12T07:45:00".to_string(),
            immediate_actions: Some("Next of kin attended with a spare key".to_string()),
            witnesses: None,
        },
        Incident {
            id: "inc-4".to_string(),
            title: "Vehicle Incident".to_string(),
            description: "Minor scrape to the pool car in the surgery car park. No third party involved.".to_string(),
            client_name: "N/A".to_string(),
            location: "West Sheffield".to_string(),
            severity: Severity::Low,
            status: IncidentStatus::Closed,
            reported_by: "Michael Chen".to_string(),
            date_reported: "2025-07-30T14:20:00".to_string(),
            immediate_actions: None,
            witnesses: None,
        },
        Incident {
            id: "inc-5".to_string(),
            title: "Safeguarding Concern".to_string(),
            description: "Unexplained shortage of cash reported by the client's family.".to_string(),
            client_name: "Dorothy Williams".to_string(),
            location: "Central Sheffield".to_string(),
            severity: Severity::High,
            status: IncidentStatus::Investigating,
            reported_by: "Jennifer Mills".to_string(),
            date_reported: "2025-08-22T11:05:00".to_string(),
            immediate_actions: Some("Escalated to the safeguarding lead".to_string()),
            witnesses: Some("Family member present".to_string()),
        },
    ]
}

pub fn patches() -> Vec<Patch> {
    let rows: [(&str, &str, &str, u32, u32, u32, u32); 8] = [
        ("patch-1", "City Centre", "Central", 18, 7, 3, 2),
        ("patch-2", "Hillsborough", "North", 24, 9, 4, 3),
        ("patch-3", "Meadowhead", "South", 15, 6, 2, 1),
        ("patch-4", "Handsworth", "East", 12, 5, 2, 0),
        ("patch-5", "Crookes", "West", 20, 8, 5, 2),
        ("patch-6", "Firth Park", "Northeast", 10, 4, 1, 1),
        ("patch-7", "Gleadless", "Southeast", 9, 4, 2, 0),
        ("patch-8", "Stannington", "Northwest", 7, 3, 1, 1),
    ];
    rows.iter()
        .map(
            |&(id, name, district, clients, staff, available, pending)| Patch {
                id: id.to_string(),
                name: name.to_string(),
                planner: "Planning Team".to_string(),
                district: district.to_string(),
                client_count: clients,
                staff_count: staff,
                available_staff: available,
                pending_clients: pending,
            },
        )
        .collect()
}

pub fn timesheets() -> Vec<TimesheetEntry> {
    vec![
        timesheet("ts-1", "staff-1", 38.5, 96.0, 11, 2.5, 12.40),
        timesheet("ts-2", "staff-2", 41.0, 120.5, 12, 4.0, 12.40),
        timesheet("ts-3", "staff-3", 29.5, 18.0, 9, 0.0, 11.95),
        timesheet("ts-4", "staff-5", 22.0, 0.0, 6, 0.0, 13.10),
    ]
}

fn timesheet(
    id: &str,
    staff_id: &str,
    hours: f32,
    mileage: f32,
    shifts: u32,
    overtime: f32,
    rate: f32,
) -> TimesheetEntry {
    let weekday_hours = (hours - hours / 6.0) / 5.0;
    TimesheetEntry {
        id: id.to_string(),
        staff_id: staff_id.to_string(),
        week_ending: "2025-08-24".to_string(),
        total_hours: hours,
        total_mileage: mileage,
        shifts_completed: shifts,
        overtime_hours: overtime,
        hourly_rate: rate,
        daily_hours: DailyBreakdown {
            monday: weekday_hours,
            tuesday: weekday_hours,
            wednesday: weekday_hours,
            thursday: weekday_hours,
            friday: weekday_hours,
            weekend: hours / 6.0,
        },
        daily_mileage: DailyBreakdown {
            monday: mileage / 5.0,
            tuesday: mileage / 5.0,
            wednesday: mileage / 5.0,
            thursday: mileage / 5.0,
            friday: mileage / 5.0,
            weekend: 0.0,
        },
    }
}

pub fn visits() -> Vec<Visit> {
    let today = "2025-08-25";
    vec![
        visit("visit-1", "client-1", "staff-1", today, TimeSlot::Am, 45, VisitStatus::Completed),
        visit("visit-2", "client-2", "staff-3", today, TimeSlot::Am, 30, VisitStatus::InProgress),
        visit("visit-3", "client-3", "staff-1", today, TimeSlot::Am, 60, VisitStatus::Scheduled),
        visit("visit-4", "client-1", "staff-2", today, TimeSlot::Pm, 45, VisitStatus::Scheduled),
        visit("visit-5", "client-3", "staff-2", today, TimeSlot::Pm, 60, VisitStatus::Scheduled),
        visit("visit-6", "client-2", "staff-3", "2025-08-24", TimeSlot::Am, 30, VisitStatus::Missed),
    ]
}

fn visit(
    id: &str,
    client_id: &str,
    staff_id: &str,
    date: &str,
    slot: TimeSlot,
    duration: u32,
    status: VisitStatus,
) -> Visit {
    Visit {
        id: id.to_string(),
        client_id: client_id.to_string(),
        staff_id: staff_id.to_string(),
        date: date.to_string(),
        time_slot: slot,
        duration,
        tasks: vec!["Personal Care".to_string(), "Medication".to_string()],
        status,
        location: "Sheffield".to_string(),
        mileage: Some(4.2),
        notes: None,
    }
}

pub fn activity_log() -> Vec<ActivityLogEntry> {
    vec![
        activity(
            "act-1",
            ActivityKind::MissedMedication,
            "Margaret Thompson - 08:00 Ramipril not signed for",
            "2025-08-25T08:40:00",
            Priority::High,
            Some("client-1"),
        ),
        activity(
            "act-2",
            ActivityKind::NoAccess,
            "Robert Davies - no answer on morning call",
            "2025-08-25T07:50:00",
            Priority::Critical,
            Some("client-2"),
        ),
        activity(
            "act-3",
            ActivityKind::Alert,
            "Co-codamol low stock for Dorothy Williams",
            "2025-08-24T18:10:00",
            Priority::Medium,
            Some("client-3"),
        ),
        activity(
            "act-4",
            ActivityKind::ContactNote,
            "Family visit arranged for Arthur Pemberton on Saturday",
            "2025-08-24T15:30:00",
            Priority::Low,
            Some("client-4"),
        ),
        activity(
            "act-5",
            ActivityKind::Incident,
            "Safeguarding concern raised for Dorothy Williams",
            "2025-08-22T11:06:00",
            Priority::High,
            Some("client-3"),
        ),
    ]
}

fn activity(
    id: &str,
    kind: ActivityKind,
    message: &str,
    timestamp: &str,
    priority: Priority,
    client_id: Option<&str>,
) -> ActivityLogEntry {
    ActivityLogEntry {
        id: id.to_string(),
        kind,
        message: message.to_string(),
        timestamp: timestamp.to_string(),
        priority,
        client_id: client_id.map(|c| c.to_string()),
        staff_id: None,
        resolved: false,
    }
}

pub fn emar_history() -> Vec<EmarHistoryEntry> {
    vec![
        EmarHistoryEntry {
            id: "emar-1".to_string(),
            client_id: "client-1".to_string(),
            medication_name: "Ramipril".to_string(),
            dosage: "5mg".to_string(),
            scheduled_time: "08:00".to_string(),
            status: DoseStatus::Administered,
            reason: None,
            carer_name: "Jennifer Mills".to_string(),
            timestamp: "2025-08-24T08:05:00".to_string(),
            notes: None,
        },
        EmarHistoryEntry {
            id: "emar-2".to_string(),
            client_id: "client-1".to_string(),
            medication_name: "Atorvastatin".to_string(),
            dosage: "20mg".to_string(),
            scheduled_time: "20:00".to_string(),
            status: DoseStatus::Refused,
            reason: Some("Client felt unwell".to_string()),
            carer_name: "Michael Chen".to_string(),
            timestamp: "2025-08-23T20:10:00".to_string(),
            notes: Some("GP informed the next morning".to_string()),
        },
        EmarHistoryEntry {
            id: "emar-3".to_string(),
            client_id: "client-3".to_string(),
            medication_name: "Co-codamol".to_string(),
            dosage: "8/500mg".to_string(),
            scheduled_time: "12:00".to_string(),
            status: DoseStatus::Skipped,
            reason: Some("Carer decision".to_string()),
            carer_name: "Jennifer Mills".to_string(),
            timestamp: "2025-08-23T12:02:00".to_string(),
            notes: Some("Client already took pain relief with breakfast".to_string()),
        },
        EmarHistoryEntry {
            id: "emar-4".to_string(),
            client_id: "client-2".to_string(),
            medication_name: "Metformin".to_string(),
            dosage: "500mg".to_string(),
            scheduled_time: "13:00".to_string(),
            status: DoseStatus::Administered,
            reason: None,
            carer_name: "Sarah Ahmed".to_string(),
            timestamp: "2025-08-24T13:00:00".to_string(),
            notes: None,
        },
    ]
}

pub fn dashboard_metrics() -> DashboardMetrics {
    DashboardMetrics {
        active_clients: 115,
        staff_on_duty: 32,
        pending_clients: 9,
        active_alerts: 5,
        incident_reports: 3,
        pending_assessments: 4,
        clients_ending_soon: 6,
        staff_on_leave: 3,
    }
}

fn weekdays() -> Vec<String> {
    ["Monday", "Tuesday", "Wednesday", "Thursday", "Friday"]
        .iter()
        .map(|d| d.to_string())
        .collect()
}

fn all_days() -> Vec<String> {
    [
        "Monday",
        "Tuesday",
        "Wednesday",
        "Thursday",
        "Friday",
        "Saturday",
        "Sunday",
    ]
    .iter()
    .map(|d| d.to_string())
    .collect()
}
