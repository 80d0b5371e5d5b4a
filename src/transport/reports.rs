use serde::Deserialize;

use super::path::resource;
use super::time::render_gateway_time;
use crate::domain::{
    DeliveryReportDetail, DeliveryReportQuery, DeliveryReportRow, DeliveryReportSummary,
    DeliveryReports, ValidationError,
};

pub const DELIVERY_REPORTS_RESOURCE: &str = "deliveryReports";

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("invalid XML response: {0}")]
    Xml(#[from] quick_xml::DeError),
}

#[derive(Debug, Clone, Deserialize)]
struct ReportListXmlResponse {
    #[serde(default)]
    userdirectory: String,
    #[serde(default)]
    reports: Option<ReportsXml>,
}

#[derive(Debug, Clone, Deserialize)]
struct ReportsXml {
    #[serde(default)]
    report: Vec<ReportXml>,
}

#[derive(Debug, Clone, Deserialize)]
struct ReportXml {
    #[serde(rename = "@name")]
    name: String,
    #[serde(rename = "@last_updated", default)]
    last_updated: String,
    #[serde(rename = "@extension", default)]
    extension: String,
    #[serde(default)]
    reportrow: Vec<ReportRowXml>,
}

#[derive(Debug, Clone, Deserialize)]
struct ReportRowXml {
    #[serde(rename = "@message_id", default)]
    message_id: String,
    #[serde(rename = "@mobile_number", default)]
    mobile_number: String,
    #[serde(rename = "@status", default)]
    status: String,
    #[serde(rename = "@last_updated", default)]
    last_updated: String,
    #[serde(rename = "@custom", default)]
    custom: String,
}

/// Resource path for a single report lookup.
///
/// Shapes: `deliveryReport/{name}`, `.../custom/{custom}`, `.../{start}/{end}`
/// and `.../custom/{custom}/{start}/{end}`. Every segment is escaped after
/// numeric times are rendered.
pub fn delivery_report_resource(query: &DeliveryReportQuery) -> Result<String, ValidationError> {
    let mut segments = vec![query.name().as_str().to_owned()];
    if let Some(custom) = query.custom_tag() {
        segments.push("custom".to_owned());
        segments.push(custom.to_owned());
    }
    if let Some((start, end)) = query.range() {
        segments.push(render_gateway_time(start)?);
        segments.push(render_gateway_time(end)?);
    }
    Ok(resource(
        "deliveryReport",
        segments.iter().map(String::as_str),
    ))
}

pub fn decode_delivery_reports_xml_response(xml: &str) -> Result<DeliveryReports, TransportError> {
    let parsed: ReportListXmlResponse = quick_xml::de::from_str(xml)?;
    let reports = parsed
        .reports
        .map(|reports| reports.report)
        .unwrap_or_default()
        .into_iter()
        .map(|report| DeliveryReportSummary {
            name: report.name,
            last_updated: report.last_updated,
            extension: report.extension,
        })
        .collect();

    Ok(DeliveryReports {
        userdirectory: parsed.userdirectory,
        reports,
    })
}

pub fn decode_delivery_report_xml_response(
    xml: &str,
) -> Result<Vec<DeliveryReportDetail>, TransportError> {
    let parsed: ReportListXmlResponse = quick_xml::de::from_str(xml)?;
    Ok(parsed
        .reports
        .map(|reports| reports.report)
        .unwrap_or_default()
        .into_iter()
        .map(|report| DeliveryReportDetail {
            name: report.name,
            last_updated: report.last_updated,
            extension: report.extension,
            rows: report
                .reportrow
                .into_iter()
                .map(|row| DeliveryReportRow {
                    message_id: row.message_id,
                    mobile_number: row.mobile_number,
                    status: row.status,
                    last_updated: row.last_updated,
                    custom: row.custom,
                })
                .collect(),
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ReportName;

    fn campaign() -> ReportName {
        ReportName::new("mycampaign").unwrap()
    }

    #[test]
    fn resource_without_filters() {
        let query = DeliveryReportQuery::new(campaign());
        assert_eq!(
            delivery_report_resource(&query).unwrap(),
            "deliveryReport/mycampaign"
        );
    }

    #[test]
    fn resource_with_custom_only() {
        let query = DeliveryReportQuery::new(campaign()).custom("tag");
        assert_eq!(
            delivery_report_resource(&query).unwrap(),
            "deliveryReport/mycampaign/custom/tag"
        );
    }

    #[test]
    fn resource_with_dates_only() {
        let query = DeliveryReportQuery::new(campaign()).between("T1", "T2");
        assert_eq!(
            delivery_report_resource(&query).unwrap(),
            "deliveryReport/mycampaign/T1/T2"
        );
    }

    #[test]
    fn resource_with_custom_and_dates() {
        let query = DeliveryReportQuery::new(campaign())
            .between("T1", "T2")
            .custom("tag");
        assert_eq!(
            delivery_report_resource(&query).unwrap(),
            "deliveryReport/mycampaign/custom/tag/T1/T2"
        );
    }

    #[test]
    fn resource_renders_and_escapes_numeric_dates() {
        let query = DeliveryReportQuery::new(ReportName::all()).between(1_700_000_000, 1_700_086_400);
        assert_eq!(
            delivery_report_resource(&query).unwrap(),
            "deliveryReport/all/2023-11-14T22%3A13%3A20%2B00%3A00/2023-11-15T22%3A13%3A20%2B00%3A00"
        );
    }

    #[test]
    fn decode_report_listing() {
        let xml = r#"<response processed_date="2023-11-14T22:13:20+00:00">
          <userdirectory>abc123</userdirectory>
          <reports quantity="2">
            <report name="GatewayAPI_14-11-23" last_updated="2023-11-14 22:00:00" extension="csv"/>
            <report name="Spring" last_updated="2023-03-01 09:00:00" extension="csv"/>
          </reports>
        </response>"#;

        let parsed = decode_delivery_reports_xml_response(xml).unwrap();
        assert_eq!(parsed.userdirectory, "abc123");
        assert_eq!(
            parsed
                .reports
                .iter()
                .map(|it| it.name.as_str())
                .collect::<Vec<_>>(),
            vec!["GatewayAPI_14-11-23", "Spring"]
        );
        assert_eq!(parsed.reports[0].extension, "csv");
    }

    #[test]
    fn decode_report_details_with_rows() {
        let xml = r#"<response>
          <reports quantity="1">
            <report name="Spring" last_updated="2023-03-01 09:00:00" extension="csv">
              <reportrow message_id="3000000001" last_updated="2023-03-01 09:00:01" mobile_number="447000000001" status="delivered" custom="tag"/>
              <reportrow message_id="3000000002" last_updated="2023-03-01 09:00:02" mobile_number="447000000002" status="failed" custom=""/>
            </report>
          </reports>
        </response>"#;

        let parsed = decode_delivery_report_xml_response(xml).unwrap();
        assert_eq!(parsed.len(), 1);
        let report = &parsed[0];
        assert_eq!(report.name, "Spring");
        assert_eq!(report.rows.len(), 2);
        assert_eq!(
            report.rows[0],
            DeliveryReportRow {
                message_id: "3000000001".to_owned(),
                mobile_number: "447000000001".to_owned(),
                status: "delivered".to_owned(),
                last_updated: "2023-03-01 09:00:01".to_owned(),
                custom: "tag".to_owned(),
            }
        );
        assert_eq!(report.rows[1].status, "failed");
    }
}
